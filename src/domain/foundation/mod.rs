//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the clock abstraction and error
//! types that form the vocabulary of the EmpathyAI domain.

mod clock;
mod errors;
mod ids;
mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChatId, MessageId, UserId};
pub use timestamp::Timestamp;
