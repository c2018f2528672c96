//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types shared by the form and
//! benchmark domains.

mod errors;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use timestamp::{FileStamp, Timestamp};
