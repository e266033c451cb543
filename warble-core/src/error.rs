//! Domain error types
//!
//! Validation and invariant failures that are meaningful to API callers.
//! These cross every layer untouched so the HTTP boundary can map them to
//! client-facing responses.

use thiserror::Error;

/// A validation or cross-entity invariant failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Email address failed format validation.
    #[error("invalid email address")]
    InvalidEmail,

    /// Message creation referenced an account that does not exist.
    #[error("invalid author id")]
    InvalidAuthor,

    /// Message content exceeds the maximum length.
    #[error("message content exceeds {} characters", crate::validate::MAX_CONTENT_LEN)]
    InvalidContent,
}
