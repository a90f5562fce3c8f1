//! PostgreSQL implementation of FeedbackRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, MessageId, Timestamp};
use crate::ports::{FeedbackRecord, FeedbackRepository};

/// PostgreSQL implementation of FeedbackRepository.
#[derive(Clone)]
pub struct PostgresFeedbackRepository {
    pool: PgPool,
}

impl PostgresFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PostgresFeedbackRepository {
    async fn save(&self, record: &FeedbackRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO feedback (message_id, rating, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (message_id) DO UPDATE SET
                rating = EXCLUDED.rating,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(record.message_id.as_str())
        .bind(record.rating)
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save feedback: {}", e)))?;

        Ok(())
    }

    async fn find_by_message(
        &self,
        message_id: &MessageId,
    ) -> Result<Option<FeedbackRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT message_id, rating, created_at
            FROM feedback
            WHERE message_id = $1
            "#,
        )
        .bind(message_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch feedback: {}", e)))?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let message_id: String = row.get("message_id");
        let rating: i32 = row.get("rating");
        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

        Ok(Some(FeedbackRecord {
            message_id: MessageId::new(message_id)?,
            rating,
            created_at: Timestamp::from_datetime(created_at),
        }))
    }
}
