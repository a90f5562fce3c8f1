//! HTTP Speech Transcriber - Implementation of SpeechTranscriber over a
//! JSON recognition endpoint.
//!
//! The clip is posted as the raw request body with its own content type.
//! The provider answers with `{ "transcript": "..." }`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpTranscriberConfig::new("https://speech.example.com/v1/recognize")
//!     .with_api_key(api_key)
//!     .with_language("en-US");
//!
//! let transcriber = HttpSpeechTranscriber::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::ports::{AudioPayload, SpeechTranscriber, TranscriptionError};

/// Configuration for the HTTP transcriber.
#[derive(Debug, Clone)]
pub struct HttpTranscriberConfig {
    /// Recognition endpoint that accepts raw audio.
    pub endpoint_url: String,
    /// Optional bearer token.
    api_key: Option<Secret<String>>,
    /// BCP-47 language tag sent as the `language` query parameter.
    pub language: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpTranscriberConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            api_key: None,
            language: "en-US".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret().as_str())
    }
}

/// Speech transcriber backed by an HTTP recognition service.
pub struct HttpSpeechTranscriber {
    config: HttpTranscriberConfig,
    client: Client,
}

impl HttpSpeechTranscriber {
    /// Creates a transcriber, failing if the HTTP client cannot be built.
    pub fn new(config: HttpTranscriberConfig) -> Result<Self, TranscriptionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TranscriptionError::Failed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    async fn send_request(&self, audio: AudioPayload) -> Result<Response, TranscriptionError> {
        let mut request = self
            .client
            .post(&self.config.endpoint_url)
            .query(&[("language", self.config.language.as_str())])
            .header("Content-Type", audio.content_type.as_str())
            .body(audio.bytes);

        if let Some(key) = self.config.api_key() {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                TranscriptionError::ServiceUnavailable(format!(
                    "Timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else if e.is_connect() {
                TranscriptionError::ServiceUnavailable(format!("Connection failed: {}", e))
            } else {
                TranscriptionError::Failed(e.to_string())
            }
        })
    }

    async fn parse_response(&self, response: Response) -> Result<String, TranscriptionError> {
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &error_body));
        }

        let body: RecognitionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::Failed(format!("Failed to parse response: {}", e)))?;

        transcript_or_unintelligible(body.transcript)
    }
}

#[async_trait]
impl SpeechTranscriber for HttpSpeechTranscriber {
    async fn transcribe(&self, audio: AudioPayload) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::Unintelligible);
        }

        let size = audio.bytes.len();
        let response = self.send_request(audio).await?;
        let result = self.parse_response(response).await;

        match &result {
            Ok(text) => tracing::debug!(bytes = size, chars = text.len(), "Transcribed audio"),
            Err(err) => tracing::warn!(bytes = size, error = %err, "Transcription failed"),
        }

        result
    }
}

#[derive(Debug, Deserialize)]
struct RecognitionResponse {
    #[serde(default)]
    transcript: Option<String>,
}

/// Maps a non-success status to the matching failure kind.
fn status_error(status: StatusCode, body: &str) -> TranscriptionError {
    match status.as_u16() {
        422 => TranscriptionError::Unintelligible,
        429 | 500..=599 => {
            TranscriptionError::ServiceUnavailable(format!("Server returned {}: {}", status, body))
        }
        _ => TranscriptionError::Failed(format!("Unexpected status {}: {}", status, body)),
    }
}

fn transcript_or_unintelligible(transcript: Option<String>) -> Result<String, TranscriptionError> {
    match transcript {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(TranscriptionError::Unintelligible),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod status_mapping {
        use super::*;

        #[test]
        fn unprocessable_means_unintelligible() {
            assert_eq!(
                status_error(StatusCode::UNPROCESSABLE_ENTITY, ""),
                TranscriptionError::Unintelligible
            );
        }

        #[test]
        fn server_errors_and_throttling_mean_unavailable() {
            for status in [
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::BAD_GATEWAY,
                StatusCode::SERVICE_UNAVAILABLE,
            ] {
                assert!(matches!(
                    status_error(status, "busy"),
                    TranscriptionError::ServiceUnavailable(_)
                ));
            }
        }

        #[test]
        fn other_client_errors_are_failures() {
            for status in [StatusCode::BAD_REQUEST, StatusCode::UNAUTHORIZED, StatusCode::NOT_FOUND] {
                assert!(matches!(status_error(status, ""), TranscriptionError::Failed(_)));
            }
        }
    }

    mod transcript {
        use super::*;

        #[test]
        fn blank_or_missing_transcript_is_unintelligible() {
            assert_eq!(
                transcript_or_unintelligible(None),
                Err(TranscriptionError::Unintelligible)
            );
            assert_eq!(
                transcript_or_unintelligible(Some("   ".to_string())),
                Err(TranscriptionError::Unintelligible)
            );
        }

        #[test]
        fn transcript_is_trimmed() {
            assert_eq!(
                transcript_or_unintelligible(Some(" hello there \n".to_string())),
                Ok("hello there".to_string())
            );
        }

        #[test]
        fn response_body_without_transcript_parses() {
            let body: RecognitionResponse = serde_json::from_str("{}").unwrap();
            assert!(body.transcript.is_none());
        }
    }

    mod transport {
        use super::*;

        #[test]
        fn config_defaults() {
            let config = HttpTranscriberConfig::new("http://localhost:9000");
            assert_eq!(config.language, "en-US");
            assert_eq!(config.timeout, Duration::from_secs(30));
            assert!(config.api_key().is_none());
        }

        #[test]
        fn api_key_is_exposed_only_internally() {
            let config = HttpTranscriberConfig::new("http://localhost:9000").with_api_key("sk-test");
            assert_eq!(config.api_key(), Some("sk-test"));
            assert!(!format!("{:?}", config).contains("sk-test"));
        }

        #[tokio::test]
        async fn empty_audio_is_unintelligible_without_a_request() {
            let transcriber =
                HttpSpeechTranscriber::new(HttpTranscriberConfig::new("http://127.0.0.1:1")).unwrap();
            let result = transcriber.transcribe(AudioPayload::new(Vec::new())).await;
            assert_eq!(result, Err(TranscriptionError::Unintelligible));
        }

        #[tokio::test]
        async fn unreachable_endpoint_is_unavailable() {
            let transcriber = HttpSpeechTranscriber::new(
                HttpTranscriberConfig::new("http://127.0.0.1:1/recognize")
                    .with_timeout(Duration::from_secs(2)),
            )
            .unwrap();
            let result = transcriber.transcribe(AudioPayload::new(vec![0u8; 16])).await;
            assert!(matches!(result, Err(TranscriptionError::ServiceUnavailable(_))));
        }
    }
}
