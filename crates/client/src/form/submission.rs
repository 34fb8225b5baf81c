//! Submission state machine and failure translation.

use tracing::{info, warn};

use common::{AppError, AppResult, ErrorTranslator, FormError};

/// Phase of the signup submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Request in flight; further submits are rejected
    Submitting,
    /// Terminal; control passed to navigation
    Succeeded,
    /// Last attempt failed; the user may retry
    Failed,
}

impl SubmissionPhase {
    /// Enter `Submitting` from `Idle` or `Failed`.
    pub fn begin(&mut self) -> AppResult<()> {
        match self {
            SubmissionPhase::Idle | SubmissionPhase::Failed => {
                *self = SubmissionPhase::Submitting;
                Ok(())
            }
            SubmissionPhase::Submitting => Err(AppError::SubmissionInFlight),
            SubmissionPhase::Succeeded => Err(AppError::AlreadySubmitted),
        }
    }

    pub fn succeed(&mut self) {
        info!("Signup succeeded");
        *self = SubmissionPhase::Succeeded;
    }

    pub fn fail(&mut self) {
        *self = SubmissionPhase::Failed;
    }

    /// Drop an in-flight attempt without recording a result.
    pub fn abandon(&mut self) {
        if *self == SubmissionPhase::Submitting {
            *self = SubmissionPhase::Idle;
        }
    }

    /// Whether the busy indicator should show.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }
}

/// Result of one call to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Account created; session cleared and navigation triggered
    Succeeded,
    /// Local checks failed; nothing was sent
    Blocked(Vec<FormError>),
    /// The request failed; the user stays on the form
    Failed(Vec<FormError>),
}

/// Single failure path for signup errors.
///
/// Server rejections go through the translator. Bodies it cannot read, and
/// every transport failure, become one generic `network` entry.
pub fn failure_errors(err: &AppError, translator: &dyn ErrorTranslator) -> Vec<FormError> {
    match err {
        AppError::Rejected {
            status,
            body: Some(body),
        } => {
            let errors = translator.translate(body);
            if errors.is_empty() {
                warn!("Unrecognized error body for status {}", status);
                vec![FormError::network(err.user_message())]
            } else {
                errors
            }
        }
        AppError::Validation(msg) => vec![FormError::validation(None, msg.clone())],
        other => vec![FormError::network(other.user_message())],
    }
}
