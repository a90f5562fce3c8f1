//! Axum routes for chat endpoints.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    get_history, get_preferences, health, post_chat, post_feedback, post_transcribe,
    put_preferences, ChatAppState,
};

/// Largest accepted audio upload.
pub const MAX_AUDIO_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Creates routes for chat endpoints.
///
/// - POST /chat - Compose a reply
/// - POST /feedback - Rate a message
/// - POST /transcribe - Transcribe audio and compose a reply
/// - PUT|GET /users/:user_id/preferences - Preference storage
/// - GET /users/:user_id/history - Conversation history
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/chat", post(post_chat))
        .route("/feedback", post(post_feedback))
        .route(
            "/transcribe",
            post(post_transcribe).layer(DefaultBodyLimit::max(MAX_AUDIO_UPLOAD_BYTES)),
        )
        .route(
            "/users/:user_id/preferences",
            put(put_preferences).get(get_preferences),
        )
        .route("/users/:user_id/history", get(get_history))
}

/// Combined router with chat routes under /api and the health probe.
pub fn chat_router() -> Router<ChatAppState> {
    Router::new()
        .nest("/api", chat_routes())
        .route("/health", get(health))
}
