//! In-memory repository adapters.

mod in_memory_chat_repository;
mod in_memory_feedback_repository;

pub use in_memory_chat_repository::InMemoryChatRepository;
pub use in_memory_feedback_repository::InMemoryFeedbackRepository;
