//! Chat command handlers.

mod record_feedback;
mod send_chat_message;
mod transcribe_audio;
mod user_preferences;

pub use record_feedback::{RecordFeedbackCommand, RecordFeedbackError, RecordFeedbackHandler};
pub use send_chat_message::{
    SendChatMessageCommand, SendChatMessageError, SendChatMessageHandler, SendChatMessageResult,
};
pub use transcribe_audio::{
    TranscribeAudioCommand, TranscribeAudioError, TranscribeAudioHandler, TranscribeAudioResult,
    ANONYMOUS_USER,
};
pub use user_preferences::{SetUserPreferenceCommand, SetUserPreferenceHandler};
