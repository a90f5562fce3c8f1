//! Request and response bodies for the chat API.
//!
//! Field names are camelCase on the wire. The snake_case names used by
//! older clients are accepted as aliases on requests.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::ConversationTurn;

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chat body.
///
/// Missing identifiers deserialize as empty strings so they are reported
/// by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default, alias = "user_id")]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, alias = "chat_id")]
    pub chat_id: String,
    #[serde(default)]
    pub emotion: Option<String>,
}

/// POST /api/feedback body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(default, alias = "message_id")]
    pub message_id: String,
    pub rating: i32,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub message: String,
}

impl FeedbackResponse {
    pub fn received() -> Self {
        Self {
            message: "Feedback received".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribeResponse {
    pub text: String,
    pub response: String,
}

/// One entry of GET /api/users/:user_id/history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnView {
    pub emotion: String,
    pub text: String,
    pub response: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

impl From<&ConversationTurn> for TurnView {
    fn from(turn: &ConversationTurn) -> Self {
        Self {
            emotion: turn.emotion.clone(),
            text: turn.text.clone(),
            response: turn.response.clone(),
            timestamp: turn.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn unintelligible_audio(message: impl Into<String>) -> Self {
        Self::new("UNINTELLIGIBLE_AUDIO", message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new("SERVICE_UNAVAILABLE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use serde_json::json;

    mod requests {
        use super::*;

        #[test]
        fn chat_request_accepts_camel_case() {
            let req: ChatRequest = serde_json::from_value(json!({
                "userId": "u1",
                "text": "hello",
                "chatId": "c1",
                "emotion": "joy"
            }))
            .unwrap();
            assert_eq!(req.user_id, "u1");
            assert_eq!(req.chat_id, "c1");
            assert_eq!(req.emotion.as_deref(), Some("joy"));
        }

        #[test]
        fn chat_request_accepts_snake_case_aliases() {
            let req: ChatRequest = serde_json::from_value(json!({
                "user_id": "u1",
                "text": "hello",
                "chat_id": "c1"
            }))
            .unwrap();
            assert_eq!(req.user_id, "u1");
            assert_eq!(req.chat_id, "c1");
            assert!(req.emotion.is_none());
        }

        #[test]
        fn chat_request_missing_ids_default_to_empty() {
            let req: ChatRequest = serde_json::from_value(json!({"text": "hi"})).unwrap();
            assert!(req.user_id.is_empty());
            assert!(req.chat_id.is_empty());
        }

        #[test]
        fn feedback_request_accepts_both_spellings() {
            let a: FeedbackRequest =
                serde_json::from_value(json!({"messageId": "m1", "rating": 1})).unwrap();
            let b: FeedbackRequest =
                serde_json::from_value(json!({"message_id": "m1", "rating": -1})).unwrap();
            assert_eq!(a.message_id, b.message_id);
            assert_eq!(b.rating, -1);
        }
    }

    mod responses {
        use super::*;

        #[test]
        fn turn_view_uses_rfc3339() {
            let turn = ConversationTurn::new("joy", "hi", "hello", Timestamp::now());
            let view = TurnView::from(&turn);
            assert_eq!(view.timestamp, turn.timestamp.to_rfc3339());
        }

        #[test]
        fn error_response_omits_missing_details() {
            let value = serde_json::to_value(ErrorResponse::bad_request("nope")).unwrap();
            assert_eq!(value, json!({"code": "BAD_REQUEST", "message": "nope"}));
        }

        #[test]
        fn feedback_response_message() {
            assert_eq!(FeedbackResponse::received().message, "Feedback received");
        }
    }
}
