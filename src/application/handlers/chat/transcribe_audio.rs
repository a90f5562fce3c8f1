//! TranscribeAudioHandler - Turns an audio clip into text and answers it.
//!
//! Transcribed messages carry no emotion label, so replies use the generic
//! templates.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::conversation::ResponseComposer;
use crate::ports::{AudioPayload, SpeechTranscriber, TranscriptionError};

/// User id recorded for clips uploaded without one.
pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Debug, Clone)]
pub struct TranscribeAudioCommand {
    pub user_id: Option<String>,
    pub audio: AudioPayload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribeAudioResult {
    pub text: String,
    pub response: String,
}

#[derive(Debug, Clone, Error)]
pub enum TranscribeAudioError {
    #[error("No audio was uploaded")]
    MissingAudio,

    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
}

pub struct TranscribeAudioHandler {
    composer: Arc<ResponseComposer>,
    transcriber: Arc<dyn SpeechTranscriber>,
}

impl TranscribeAudioHandler {
    pub fn new(composer: Arc<ResponseComposer>, transcriber: Arc<dyn SpeechTranscriber>) -> Self {
        Self {
            composer,
            transcriber,
        }
    }

    pub async fn handle(
        &self,
        cmd: TranscribeAudioCommand,
    ) -> Result<TranscribeAudioResult, TranscribeAudioError> {
        if cmd.audio.is_empty() {
            return Err(TranscribeAudioError::MissingAudio);
        }

        let user_id = cmd
            .user_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_USER.to_string());

        let text = self.transcriber.transcribe(cmd.audio).await?;
        let response = self.composer.compose("", &text, &user_id);

        tracing::info!(user_id = %user_id, chars = text.len(), "Answered transcribed message");
        Ok(TranscribeAudioResult { text, response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::speech::MockSpeechTranscriber;
    use crate::domain::conversation::ConversationStore;

    fn handler(transcriber: MockSpeechTranscriber) -> (TranscribeAudioHandler, Arc<ResponseComposer>) {
        let composer = Arc::new(ResponseComposer::new(Arc::new(ConversationStore::new())));
        (
            TranscribeAudioHandler::new(composer.clone(), Arc::new(transcriber)),
            composer,
        )
    }

    fn clip() -> AudioPayload {
        AudioPayload::new(vec![0u8; 32])
    }

    #[tokio::test]
    async fn answers_transcribed_text() {
        let (handler, composer) =
            handler(MockSpeechTranscriber::new().with_transcript("I can't sleep"));

        let result = handler
            .handle(TranscribeAudioCommand {
                user_id: Some("user9".to_string()),
                audio: clip(),
            })
            .await
            .unwrap();

        assert_eq!(result.text, "I can't sleep");
        assert!(result.response.contains("I can't sleep"));
        let turn = composer.store().last_turn("user9").unwrap();
        assert_eq!(turn.emotion, "");
    }

    #[tokio::test]
    async fn missing_user_id_defaults_to_anonymous() {
        let (handler, composer) = handler(MockSpeechTranscriber::new());

        handler
            .handle(TranscribeAudioCommand {
                user_id: None,
                audio: clip(),
            })
            .await
            .unwrap();
        handler
            .handle(TranscribeAudioCommand {
                user_id: Some("  ".to_string()),
                audio: clip(),
            })
            .await
            .unwrap();

        assert_eq!(composer.store().turn_count(ANONYMOUS_USER), 2);
    }

    #[tokio::test]
    async fn empty_audio_is_rejected_before_transcribing() {
        let transcriber = MockSpeechTranscriber::new();
        let (handler, _) = handler(transcriber.clone());

        let result = handler
            .handle(TranscribeAudioCommand {
                user_id: None,
                audio: AudioPayload::new(Vec::new()),
            })
            .await;

        assert!(matches!(result, Err(TranscribeAudioError::MissingAudio)));
        assert_eq!(transcriber.call_count(), 0);
    }

    #[tokio::test]
    async fn transcription_errors_keep_their_cause() {
        let (handler, composer) = handler(
            MockSpeechTranscriber::new()
                .with_error(TranscriptionError::Unintelligible)
                .with_error(TranscriptionError::ServiceUnavailable("down".into())),
        );
        let cmd = TranscribeAudioCommand {
            user_id: None,
            audio: clip(),
        };

        assert!(matches!(
            handler.handle(cmd.clone()).await,
            Err(TranscribeAudioError::Transcription(TranscriptionError::Unintelligible))
        ));
        assert!(matches!(
            handler.handle(cmd).await,
            Err(TranscribeAudioError::Transcription(
                TranscriptionError::ServiceUnavailable(_)
            ))
        ));
        assert_eq!(composer.store().turn_count(ANONYMOUS_USER), 0);
    }
}
