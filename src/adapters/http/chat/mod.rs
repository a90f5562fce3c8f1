//! Chat HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::{ChatApiError, ChatAppState};
pub use routes::{chat_router, chat_routes, MAX_AUDIO_UPLOAD_BYTES};
