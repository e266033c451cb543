//! Input validation
//!
//! Rules are checked before anything reaches storage. The email pattern is
//! compiled once and shared; there is no mutable global state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DomainError;

/// Maximum message length, counted in Unicode scalar values.
pub const MAX_CONTENT_LEN: usize = 280;

/// Local part, `@`, dotted domain, 2-6 letter TLD segment.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").expect("email regex")
});

/// Validate an email address against the fixed format rule.
pub fn email(email: &str) -> Result<(), DomainError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail)
    }
}

/// Validate message content length.
pub fn content(content: &str) -> Result<(), DomainError> {
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(DomainError::InvalidContent);
    }
    Ok(())
}
