//! Mock Speech Transcriber for testing.
//!
//! Results are queued and consumed in order. Once the queue is empty the
//! fallback result is returned. Every payload is recorded for verification.
//!
//! # Example
//!
//! ```ignore
//! let transcriber = MockSpeechTranscriber::new()
//!     .with_transcript("I feel a bit lost today")
//!     .with_error(TranscriptionError::Unintelligible);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AudioPayload, SpeechTranscriber, TranscriptionError};

/// Mock transcriber with queued results.
#[derive(Debug, Clone)]
pub struct MockSpeechTranscriber {
    results: Arc<Mutex<VecDeque<Result<String, TranscriptionError>>>>,
    fallback: Result<String, TranscriptionError>,
    calls: Arc<Mutex<Vec<AudioPayload>>>,
}

impl Default for MockSpeechTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSpeechTranscriber {
    /// Creates a mock that answers "mock transcript" when nothing is queued.
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Ok("mock transcript".to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful transcript.
    pub fn with_transcript(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: TranscriptionError) -> Self {
        self.push(Err(error));
        self
    }

    /// Sets the result returned once the queue is drained.
    pub fn with_fallback(mut self, fallback: Result<String, TranscriptionError>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of transcribe calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Payloads received, in call order.
    pub fn calls(&self) -> Vec<AudioPayload> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn push(&self, result: Result<String, TranscriptionError>) {
        if let Ok(mut results) = self.results.lock() {
            results.push_back(result);
        }
    }
}

#[async_trait]
impl SpeechTranscriber for MockSpeechTranscriber {
    async fn transcribe(&self, audio: AudioPayload) -> Result<String, TranscriptionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(audio);
        }

        let queued = self
            .results
            .lock()
            .ok()
            .and_then(|mut results| results.pop_front());

        queued.unwrap_or_else(|| self.fallback.clone())
    }
}
