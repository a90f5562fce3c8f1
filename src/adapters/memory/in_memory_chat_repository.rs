//! In-Memory Chat Repository
//!
//! Keeps composed replies in a map keyed by chat id.
//! Used in development when no database is configured, and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ChatId, DomainError, UserId};
use crate::ports::{ChatRecord, ChatRepository};

/// In-memory storage for chat records
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatRepository {
    chats: Arc<RwLock<HashMap<ChatId, ChatRecord>>>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn count(&self) -> usize {
        self.chats.read().await.len()
    }

    /// All records belonging to a user, oldest first
    pub async fn find_by_user(&self, user_id: &UserId) -> Vec<ChatRecord> {
        let chats = self.chats.read().await;
        let mut records: Vec<ChatRecord> = chats
            .values()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        records
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.chats.write().await.clear();
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn save(&self, record: &ChatRecord) -> Result<(), DomainError> {
        let mut chats = self.chats.write().await;
        chats.insert(record.chat_id.clone(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, chat_id: &ChatId) -> Result<Option<ChatRecord>, DomainError> {
        let chats = self.chats.read().await;
        Ok(chats.get(chat_id).cloned())
    }
}
