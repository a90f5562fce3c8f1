//! Feedback repository port.
//!
//! Stores the rating a user gave a message. One rating per message id;
//! rating the same message again replaces the earlier rating.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, MessageId, Timestamp};

/// Repository port for per-message feedback.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Inserts or replaces the feedback stored under `record.message_id`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, record: &FeedbackRecord) -> Result<(), DomainError>;

    /// Finds the feedback for a message.
    async fn find_by_message(
        &self,
        message_id: &MessageId,
    ) -> Result<Option<FeedbackRecord>, DomainError>;
}

/// A rating left on a message. Ratings are caller-defined integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub message_id: MessageId,
    pub rating: i32,
    pub created_at: Timestamp,
}

impl FeedbackRecord {
    pub fn new(message_id: MessageId, rating: i32) -> Self {
        Self {
            message_id,
            rating,
            created_at: Timestamp::now(),
        }
    }
}
