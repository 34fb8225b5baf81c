//! Field-level format rules used to annotate the registration form.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::constants::MIN_PASSWORD_LENGTH;

/// Presentational status of a validated field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    #[default]
    Unvalidated,
    Success,
    Danger,
}

impl FieldStatus {
    /// Map a check result to a status.
    pub fn from_check(passed: bool) -> Self {
        if passed {
            FieldStatus::Success
        } else {
            FieldStatus::Danger
        }
    }

    pub fn is_danger(&self) -> bool {
        matches!(self, FieldStatus::Danger)
    }
}

/// Validation state attached to the email and password inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub email: FieldStatus,
    pub password: FieldStatus,
}

/// Conventional email syntax check.
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Password strength: minimum length, one uppercase letter and one digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
