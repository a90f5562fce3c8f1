//! In-Memory Feedback Repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, MessageId};
use crate::ports::{FeedbackRecord, FeedbackRepository};

/// In-memory storage for message ratings, one per message id
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackRepository {
    feedback: Arc<RwLock<HashMap<MessageId, FeedbackRecord>>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.feedback.read().await.len()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn save(&self, record: &FeedbackRecord) -> Result<(), DomainError> {
        self.feedback
            .write()
            .await
            .insert(record.message_id.clone(), record.clone());
        Ok(())
    }

    async fn find_by_message(
        &self,
        message_id: &MessageId,
    ) -> Result<Option<FeedbackRecord>, DomainError> {
        Ok(self.feedback.read().await.get(message_id).cloned())
    }
}
