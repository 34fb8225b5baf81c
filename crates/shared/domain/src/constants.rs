//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Account Types
// =============================================================================

/// Form type value for service providers
pub const ACCOUNT_KIND_PROVIDER: &str = "empleador";

/// Form type value for individual customers
pub const ACCOUNT_KIND_INDIVIDUAL: &str = "usuario";

// =============================================================================
// Membership
// =============================================================================

/// Wire value for the free membership tier
pub const MEMBERSHIP_FREE: &str = "GRATUITA";

/// Wire value for the silver membership tier
pub const MEMBERSHIP_SILVER: &str = "PLATA";

/// Wire value for the gold membership tier
pub const MEMBERSHIP_GOLD: &str = "ORO";

// =============================================================================
// Validation
// =============================================================================

/// Minimum identifier (username) length
pub const MIN_IDENTIFIER_LENGTH: u64 = 5;

/// Maximum identifier (username) length
pub const MAX_IDENTIFIER_LENGTH: u64 = 15;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Messages
// =============================================================================

/// Advisory shown until the email field has been validated once
pub const INFO_REQUIRED_DATA: &str = "enter the required data";

/// Error shown when password and confirmation differ
pub const MSG_PASSWORDS_MISMATCH: &str = "passwords do not match";

/// Error shown when the email does not look like an address
pub const MSG_INVALID_EMAIL: &str = "the email you entered is invalid";

/// Error shown when the password is too weak
pub const MSG_WEAK_PASSWORD: &str =
    "the password needs an uppercase letter, a digit and at least 8 characters";

/// Maximum star count when rendering a service rating
pub const MAX_RATING_STARS: u8 = 5;
