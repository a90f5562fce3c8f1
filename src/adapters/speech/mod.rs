//! Speech-to-text adapters.
//!
//! - `HttpSpeechTranscriber` - Remote recognition service over HTTP
//! - `MockSpeechTranscriber` - Queued results for tests

mod http_transcriber;
mod mock_transcriber;

pub use http_transcriber::{HttpSpeechTranscriber, HttpTranscriberConfig};
pub use mock_transcriber::MockSpeechTranscriber;
