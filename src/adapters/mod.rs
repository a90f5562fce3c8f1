//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the composer to external systems:
//! - `memory` - In-memory repositories (development, tests)
//! - `postgres` - PostgreSQL repositories
//! - `speech` - Speech-to-text over HTTP, plus a mock
//! - `classifier` - Offline emotion classification
//! - `http` - REST API

pub mod classifier;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod speech;
