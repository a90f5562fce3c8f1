//! Conversation domain module.
//!
//! Composes empathetic replies from an emotion label and the user's message,
//! and keeps the per-user conversation state those replies build on.

mod composer;
mod emotion;
mod intensity;
mod store;
mod templates;
mod time_of_day;
mod turn;

pub use composer::ResponseComposer;
pub use emotion::Emotion;
pub use intensity::{
    FixedIntensityEstimator, IntensityEstimator, RandomIntensityEstimator,
    DEFAULT_INTENSITY_THRESHOLD,
};
pub use store::ConversationStore;
pub use templates::{render, templates_for, ReplyTemplates, TEXT_PLACEHOLDER};
pub use time_of_day::TimeOfDay;
pub use turn::ConversationTurn;
