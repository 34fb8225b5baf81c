//! Validation gate for the registration form.
//!
//! Email and password checks annotate fields on every change. At submit time
//! only the password confirmation and the identifier constraints block,
//! unless strict mode is enabled.

use validator::Validate;

use common::FormError;
use domain::{
    is_strong_password, is_valid_email, AccountDraft, FieldStatus, MSG_INVALID_EMAIL,
    MSG_PASSWORDS_MISMATCH, MSG_WEAK_PASSWORD,
};

/// Decides whether a submission attempt may proceed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationGate {
    strict: bool,
}

impl ValidationGate {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn check_email(email: &str) -> FieldStatus {
        FieldStatus::from_check(is_valid_email(email))
    }

    pub fn check_password(password: &str) -> FieldStatus {
        FieldStatus::from_check(is_strong_password(password))
    }

    /// Run the submit-time checks.
    ///
    /// A confirmation mismatch short-circuits with exactly one
    /// `securityCheck` error.
    pub fn check_submission(&self, account: &AccountDraft) -> Result<(), Vec<FormError>> {
        if !account.passwords_match() {
            return Err(vec![FormError::security_check(MSG_PASSWORDS_MISMATCH)]);
        }

        let mut errors = Vec::new();
        if let Err(e) = account.validate() {
            for (field, field_errors) in e.field_errors() {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string());
                    errors.push(FormError::validation(Some(field.to_string()), message));
                }
            }
        }

        if self.strict {
            if Self::check_email(&account.email).is_danger() {
                errors.push(FormError::validation(
                    Some("email".to_string()),
                    MSG_INVALID_EMAIL,
                ));
            }
            if Self::check_password(&account.password).is_danger() {
                errors.push(FormError::validation(
                    Some("password".to_string()),
                    MSG_WEAK_PASSWORD,
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
