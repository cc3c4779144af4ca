//! Domain-level errors.
//!
//! These errors represent failures raised by domain entities themselves.
//! They are independent of infrastructure concerns (storage, hashing, CLI).

use thiserror::Error;

/// Domain-specific errors raised by entity accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Password field could not be read or written
    #[error("Password error: {0}")]
    Password(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
