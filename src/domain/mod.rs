//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, clock, errors)
//! - `conversation` - Reply composition and per-user conversation state

pub mod conversation;
pub mod foundation;
