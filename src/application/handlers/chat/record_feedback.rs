//! RecordFeedbackHandler - Stores a rating for a message.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, MessageId, ValidationError};
use crate::ports::{FeedbackRecord, FeedbackRepository};

#[derive(Debug, Clone)]
pub struct RecordFeedbackCommand {
    pub message_id: String,
    pub rating: i32,
}

#[derive(Debug, Clone, Error)]
pub enum RecordFeedbackError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to persist feedback: {0}")]
    Repository(#[from] DomainError),
}

/// Handler for message ratings. Ratings are stored as given.
pub struct RecordFeedbackHandler {
    repository: Arc<dyn FeedbackRepository>,
}

impl RecordFeedbackHandler {
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordFeedbackCommand,
    ) -> Result<FeedbackRecord, RecordFeedbackError> {
        let message_id = MessageId::new(cmd.message_id)?;
        let record = FeedbackRecord::new(message_id, cmd.rating);

        self.repository.save(&record).await?;

        tracing::info!(message_id = %record.message_id, rating = record.rating, "Feedback recorded");
        Ok(record)
    }
}
