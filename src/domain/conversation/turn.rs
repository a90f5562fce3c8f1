//! A single completed exchange with a user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// One message and the reply composed for it.
///
/// Created once per composition and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Emotion label exactly as supplied (may be empty or unrecognized).
    pub emotion: String,
    /// The user's message.
    pub text: String,
    /// The composed reply.
    pub response: String,
    /// When the reply was composed.
    pub timestamp: Timestamp,
}

impl ConversationTurn {
    pub fn new(
        emotion: impl Into<String>,
        text: impl Into<String>,
        response: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            emotion: emotion.into(),
            text: text.into(),
            response: response.into(),
            timestamp,
        }
    }
}
