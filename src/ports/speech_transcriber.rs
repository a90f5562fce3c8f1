//! Speech-to-text port.
//!
//! Converts an uploaded audio clip into text via an external recognition
//! provider. Failures are split by cause so callers can tell unintelligible
//! audio apart from an unreachable provider.

use async_trait::async_trait;
use thiserror::Error;

/// Port for transcribing recorded speech.
#[async_trait]
pub trait SpeechTranscriber: Send + Sync {
    /// Transcribes the clip into text.
    ///
    /// # Errors
    ///
    /// - `Unintelligible` when the provider could not make out any speech
    /// - `ServiceUnavailable` when the provider could not be reached or is overloaded
    /// - `Failed` for anything else (bad payload, unexpected response)
    async fn transcribe(&self, audio: AudioPayload) -> Result<String, TranscriptionError>;
}

/// An uploaded audio clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    /// Raw encoded audio bytes.
    pub bytes: Vec<u8>,
    /// MIME type reported by the uploader.
    pub content_type: String,
    /// Original file name, if one was sent.
    pub file_name: Option<String>,
}

impl AudioPayload {
    /// MIME type assumed when the uploader does not send one.
    pub const DEFAULT_CONTENT_TYPE: &'static str = "audio/wav";

    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: Self::DEFAULT_CONTENT_TYPE.to_string(),
            file_name: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Errors reported by speech transcribers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptionError {
    #[error("could not understand audio")]
    Unintelligible,

    #[error("speech recognition service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("transcription failed: {0}")]
    Failed(String),
}
