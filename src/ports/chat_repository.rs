//! Chat repository port.
//!
//! Durable storage for composed replies. Each record is keyed by a
//! caller-chosen chat id; saving the same id again replaces the record.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChatId, DomainError, Timestamp, UserId};

/// Repository port for persisted chat replies.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Inserts or replaces the record stored under `record.chat_id`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, record: &ChatRecord) -> Result<(), DomainError>;

    /// Finds a record by chat id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, chat_id: &ChatId) -> Result<Option<ChatRecord>, DomainError>;
}

/// Who authored a persisted chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Ai,
}

impl ChatSender {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatSender::User => "user",
            ChatSender::Ai => "ai",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(ChatSender::User),
            "ai" => Some(ChatSender::Ai),
            _ => None,
        }
    }
}

/// A persisted chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub chat_id: ChatId,
    pub user_id: UserId,
    /// Message body. For AI replies this is the composed response.
    pub text: String,
    pub sender: ChatSender,
    /// Emotion label supplied with the originating message.
    pub emotion: Option<String>,
    pub created_at: Timestamp,
}

impl ChatRecord {
    /// Creates a record for a composed AI reply.
    pub fn ai_reply(
        chat_id: ChatId,
        user_id: UserId,
        text: impl Into<String>,
        emotion: Option<String>,
    ) -> Self {
        Self {
            chat_id,
            user_id,
            text: text.into(),
            sender: ChatSender::Ai,
            emotion,
            created_at: Timestamp::now(),
        }
    }
}
