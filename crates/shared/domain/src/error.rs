//! Domain-level errors.
//!
//! These errors represent business rule violations in the client-side
//! drafts. They are independent of transport concerns (HTTP, serialization).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A form field name that the draft does not know about
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Operation only valid for another account type
    #[error("Not supported for {0} accounts")]
    WrongAccountKind(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        DomainError::UnknownField(name.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
