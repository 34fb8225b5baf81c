//! Unified error handling for the marketplace client.
//!
//! Provides a single error type for transport, decoding and workflow
//! failures, with user-facing messages that hide internal details.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Client-side input
    #[error("{0}")]
    Validation(String),

    // Server responses
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        /// Parsed JSON body, if the response carried one
        body: Option<serde_json::Value>,
    },

    #[error("Resource not found")]
    NotFound,

    #[error("Authentication required")]
    Unauthorized,

    // Transport
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    Decode(String),

    // Workflow
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("The account was already registered")]
    AlreadySubmitted,

    #[error("Request cancelled")]
    Cancelled,

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs and the CLI
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Rejected { .. } => "REJECTED",
            AppError::NotFound => "NOT_FOUND",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Timeout => "TIMEOUT",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
            AppError::AlreadySubmitted => "ALREADY_SUBMITTED",
            AppError::Cancelled => "CANCELLED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the failure happened before a usable response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Timeout | AppError::Decode(_)
        )
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for transport/internal errors
            AppError::Network(e) => {
                tracing::error!("Network error: {}", e);
                "could not reach the server".to_string()
            }
            AppError::Timeout => {
                tracing::error!("Request timed out");
                "the server took too long to respond".to_string()
            }
            AppError::Decode(e) => {
                tracing::error!("Decode error: {}", e);
                "the server sent an unexpected response".to_string()
            }
            AppError::Rejected { status, .. } => {
                tracing::warn!("Request rejected with status {}", status);
                "the server rejected the request".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "an internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            other => AppError::Validation(other.to_string()),
        }
    }
}

// =============================================================================
// Transport Error Conversion (reqwest)
// =============================================================================

#[cfg(feature = "http")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        AppError::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        AppError::Decode(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
