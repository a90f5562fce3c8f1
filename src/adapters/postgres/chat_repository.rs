//! PostgreSQL implementation of ChatRepository.
//!
//! Persists composed replies to the `chats` table, upserting on chat id.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::foundation::{ChatId, DomainError, Timestamp, UserId};
use crate::ports::{ChatRecord, ChatRepository, ChatSender};

/// PostgreSQL implementation of ChatRepository.
#[derive(Clone)]
pub struct PostgresChatRepository {
    pool: PgPool,
}

impl PostgresChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PostgresChatRepository {
    async fn save(&self, record: &ChatRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO chats (chat_id, user_id, text, sender, emotion, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (chat_id) DO UPDATE SET
                user_id = EXCLUDED.user_id,
                text = EXCLUDED.text,
                sender = EXCLUDED.sender,
                emotion = EXCLUDED.emotion,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(record.chat_id.as_str())
        .bind(record.user_id.as_str())
        .bind(&record.text)
        .bind(record.sender.as_str())
        .bind(record.emotion.as_deref())
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save chat: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, chat_id: &ChatId) -> Result<Option<ChatRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT chat_id, user_id, text, sender, emotion, created_at
            FROM chats
            WHERE chat_id = $1
            "#,
        )
        .bind(chat_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch chat: {}", e)))?;

        row.map(|row| row_to_record(&row)).transpose()
    }
}

fn row_to_record(row: &PgRow) -> Result<ChatRecord, DomainError> {
    let chat_id: String = row.get("chat_id");
    let user_id: String = row.get("user_id");
    let text: String = row.get("text");
    let sender: String = row.get("sender");
    let emotion: Option<String> = row.get("emotion");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    let sender = ChatSender::parse(&sender)
        .ok_or_else(|| DomainError::database(format!("Invalid sender: {}", sender)))?;

    Ok(ChatRecord {
        chat_id: ChatId::new(chat_id)?,
        user_id: UserId::new(user_id)?,
        text,
        sender,
        emotion,
        created_at: Timestamp::from_datetime(created_at),
    })
}
