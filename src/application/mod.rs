//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    RecordFeedbackCommand, RecordFeedbackError, RecordFeedbackHandler, SendChatMessageCommand,
    SendChatMessageError, SendChatMessageHandler, SendChatMessageResult, SetUserPreferenceCommand,
    SetUserPreferenceHandler, TranscribeAudioCommand, TranscribeAudioError, TranscribeAudioHandler,
    TranscribeAudioResult, ANONYMOUS_USER,
};
