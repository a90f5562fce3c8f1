//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the reply composer and the collaborators around it. Adapters implement
//! these ports.
//!
//! ## Persistence Ports
//!
//! - `ChatRepository` - Composed replies keyed by chat id
//! - `FeedbackRepository` - Message ratings keyed by message id
//!
//! ## Analysis Ports
//!
//! - `EmotionClassifier` - Text to emotion distribution
//! - `SpeechTranscriber` - Audio to text

mod chat_repository;
mod emotion_classifier;
mod feedback_repository;
mod speech_transcriber;

pub use chat_repository::{ChatRecord, ChatRepository, ChatSender};
pub use emotion_classifier::{ClassificationError, EmotionClassifier, EmotionDistribution, LabelScore};
pub use feedback_repository::{FeedbackRecord, FeedbackRepository};
pub use speech_transcriber::{AudioPayload, SpeechTranscriber, TranscriptionError};
