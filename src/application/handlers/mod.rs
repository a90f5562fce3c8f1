//! Application handlers.
//!
//! Command handlers that validate input, drive the composer, and talk to
//! the ports around it.

pub mod chat;

pub use chat::*;
