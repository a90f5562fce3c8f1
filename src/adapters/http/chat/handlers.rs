//! HTTP handlers for chat endpoints.
//!
//! These handlers connect Axum routes to application layer operations.

use std::sync::Arc;

use axum::extract::{Json, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use crate::application::{
    RecordFeedbackCommand, RecordFeedbackError, RecordFeedbackHandler, SendChatMessageCommand,
    SendChatMessageError, SendChatMessageHandler, SetUserPreferenceCommand,
    SetUserPreferenceHandler, TranscribeAudioCommand, TranscribeAudioError,
    TranscribeAudioHandler,
};
use crate::domain::conversation::ResponseComposer;
use crate::ports::{
    AudioPayload, ChatRepository, EmotionClassifier, FeedbackRepository, SpeechTranscriber,
    TranscriptionError,
};

use super::dto::{
    ChatRequest, ChatResponse, ErrorResponse, FeedbackRequest, FeedbackResponse, HealthResponse,
    TranscribeResponse, TurnView,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub composer: Arc<ResponseComposer>,
    chat_repository: Arc<dyn ChatRepository>,
    send_chat: Arc<SendChatMessageHandler>,
    record_feedback: Arc<RecordFeedbackHandler>,
    transcribe: Arc<TranscribeAudioHandler>,
    set_preference: Arc<SetUserPreferenceHandler>,
    /// Include internal error causes in 500 responses.
    pub verbose_errors: bool,
}

impl ChatAppState {
    pub fn new(
        composer: Arc<ResponseComposer>,
        chat_repository: Arc<dyn ChatRepository>,
        feedback_repository: Arc<dyn FeedbackRepository>,
        transcriber: Arc<dyn SpeechTranscriber>,
    ) -> Self {
        Self {
            send_chat: Arc::new(SendChatMessageHandler::new(
                composer.clone(),
                chat_repository.clone(),
            )),
            record_feedback: Arc::new(RecordFeedbackHandler::new(feedback_repository)),
            transcribe: Arc::new(TranscribeAudioHandler::new(composer.clone(), transcriber)),
            set_preference: Arc::new(SetUserPreferenceHandler::new(composer.clone())),
            composer,
            chat_repository,
            verbose_errors: false,
        }
    }

    /// Classify chat messages that arrive without an emotion label.
    pub fn with_classifier(mut self, classifier: Arc<dyn EmotionClassifier>) -> Self {
        self.send_chat = Arc::new(
            SendChatMessageHandler::new(self.composer.clone(), self.chat_repository.clone())
                .with_classifier(classifier),
        );
        self
    }

    pub fn with_verbose_errors(mut self, verbose_errors: bool) -> Self {
        self.verbose_errors = verbose_errors;
        self
    }

    fn internal(&self, message: impl Into<String>) -> ChatApiError {
        ChatApiError::Internal {
            message: message.into(),
            verbose: self.verbose_errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/chat
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Compose and persist a reply to one message.
///
/// # Errors
/// - 400 Bad Request: empty user id, chat id, or text
/// - 500 Internal Server Error: the reply could not be persisted
pub async fn post_chat(
    State(state): State<ChatAppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ChatApiError> {
    let cmd = SendChatMessageCommand {
        user_id: request.user_id,
        chat_id: request.chat_id,
        text: request.text,
        emotion: request.emotion,
    };

    let result = state.send_chat.handle(cmd).await.map_err(|e| match e {
        SendChatMessageError::Validation(err) => ChatApiError::BadRequest(err.to_string()),
        SendChatMessageError::EmptyText => {
            ChatApiError::BadRequest("Message text cannot be empty".to_string())
        }
        SendChatMessageError::Repository(err) => state.internal(err.to_string()),
    })?;

    Ok((
        StatusCode::OK,
        Json(ChatResponse {
            response: result.response,
        }),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/feedback
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/feedback - Store a rating for a message.
pub async fn post_feedback(
    State(state): State<ChatAppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<impl IntoResponse, ChatApiError> {
    let cmd = RecordFeedbackCommand {
        message_id: request.message_id,
        rating: request.rating,
    };

    state.record_feedback.handle(cmd).await.map_err(|e| match e {
        RecordFeedbackError::Validation(err) => ChatApiError::BadRequest(err.to_string()),
        RecordFeedbackError::Repository(err) => state.internal(err.to_string()),
    })?;

    Ok((StatusCode::OK, Json(FeedbackResponse::received())))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/transcribe
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/transcribe - Transcribe an uploaded clip and answer it.
///
/// Multipart fields: `file` (or `audio`) holds the clip, `userId`
/// (or `user_id`) is optional.
///
/// # Errors
/// - 400 Bad Request: no audio part, or a malformed multipart body
/// - 422 Unprocessable Entity: the audio could not be understood
/// - 503 Service Unavailable: the recognition service is unreachable
pub async fn post_transcribe(
    State(state): State<ChatAppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ChatApiError> {
    let mut audio = None;
    let mut user_id = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ChatApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" | "audio" => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ChatApiError::BadRequest(format!("Failed to read audio: {}", e)))?;

                let mut payload = AudioPayload::new(bytes.to_vec());
                if let Some(content_type) = content_type {
                    payload = payload.with_content_type(content_type);
                }
                if let Some(file_name) = file_name {
                    payload = payload.with_file_name(file_name);
                }
                audio = Some(payload);
            }
            "userId" | "user_id" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ChatApiError::BadRequest(format!("Invalid userId field: {}", e)))?;
                user_id = Some(value);
            }
            _ => {}
        }
    }

    let audio = audio.ok_or_else(|| ChatApiError::BadRequest("Missing audio file".to_string()))?;

    let result = state
        .transcribe
        .handle(TranscribeAudioCommand { user_id, audio })
        .await
        .map_err(|e| match e {
            TranscribeAudioError::MissingAudio => {
                ChatApiError::BadRequest("Missing audio file".to_string())
            }
            TranscribeAudioError::Transcription(TranscriptionError::Unintelligible) => {
                ChatApiError::UnintelligibleAudio
            }
            TranscribeAudioError::Transcription(TranscriptionError::ServiceUnavailable(msg)) => {
                ChatApiError::ServiceUnavailable(msg)
            }
            TranscribeAudioError::Transcription(TranscriptionError::Failed(msg)) => {
                state.internal(msg)
            }
        })?;

    Ok((
        StatusCode::OK,
        Json(TranscribeResponse {
            text: result.text,
            response: result.response,
        }),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// /api/users/:user_id
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/users/:user_id/preferences - Replace the user's preference.
pub async fn put_preferences(
    State(state): State<ChatAppState>,
    Path(user_id): Path<String>,
    Json(preference): Json<Value>,
) -> Result<impl IntoResponse, ChatApiError> {
    state
        .set_preference
        .handle(SetUserPreferenceCommand {
            user_id,
            preference,
        })
        .map_err(|e| ChatApiError::BadRequest(e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/users/:user_id/preferences - Fetch the stored preference.
///
/// # Errors
/// - 404 Not Found: nothing recorded for this user
pub async fn get_preferences(
    State(state): State<ChatAppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let preference = state
        .composer
        .store()
        .preference(&user_id)
        .ok_or_else(|| ChatApiError::NotFound("Preference".to_string(), user_id))?;

    Ok((StatusCode::OK, Json(preference)))
}

/// GET /api/users/:user_id/history - Conversation turns, oldest first.
///
/// Unknown users have an empty history.
pub async fn get_history(
    State(state): State<ChatAppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let turns: Vec<TurnView> = state
        .composer
        .store()
        .history(&user_id)
        .iter()
        .map(TurnView::from)
        .collect();

    (StatusCode::OK, Json(turns))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ok()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for chat endpoints.
#[derive(Debug)]
pub enum ChatApiError {
    BadRequest(String),
    NotFound(String, String),
    UnintelligibleAudio,
    ServiceUnavailable(String),
    Internal { message: String, verbose: bool },
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ChatApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ChatApiError::NotFound(resource, id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(&resource, &id))
            }
            ChatApiError::UnintelligibleAudio => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::unintelligible_audio("Could not understand audio"),
            ),
            ChatApiError::ServiceUnavailable(msg) => {
                tracing::warn!("Speech recognition unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::service_unavailable("Speech recognition service error"),
                )
            }
            ChatApiError::Internal { message, verbose } => {
                tracing::error!("Internal error: {}", message);
                let mut error = ErrorResponse::internal("An internal error occurred");
                if verbose {
                    error = error.with_details(serde_json::json!({ "cause": message }));
                }
                (StatusCode::INTERNAL_SERVER_ERROR, error)
            }
        };

        (status, Json(error)).into_response()
    }
}
