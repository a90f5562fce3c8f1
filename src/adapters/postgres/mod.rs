//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresChatRepository` - Composed replies, upserted by chat id
//! - `PostgresFeedbackRepository` - Message ratings, upserted by message id
//!
//! Tables are created by the SQL files under `migrations/`.

mod chat_repository;
mod feedback_repository;

pub use chat_repository::PostgresChatRepository;
pub use feedback_repository::PostgresFeedbackRepository;
