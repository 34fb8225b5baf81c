//! Common utilities shared by the marketplace client crates.
//!
//! This crate provides:
//! - Unified error handling for transport and workflow failures
//! - The form error list and server error translation
//! - Configuration structures

pub mod config;
pub mod error;
pub mod form_error;

pub use config::*;
pub use error::{AppError, AppResult};
pub use form_error::{ErrorTranslator, FieldErrorTranslator, FormError, FormErrorKind};
