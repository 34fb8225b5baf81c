//! Domain layer - Registration drafts, reference data and validation rules.
//!
//! This crate contains pure domain logic with no transport dependencies.
//! All types here are shared by the HTTP client and the form controller.

pub mod account;
pub mod address;
pub mod constants;
pub mod error;
pub mod location;
pub mod profile;
pub mod service;
pub mod signup;
pub mod validation;

pub use account::{AccountDraft, AccountField, AccountKind, MembershipTier};
pub use address::{AddressDraft, AddressField};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use location::{City, CityId, CityNeighborhoods, Neighborhood, NeighborhoodId};
pub use profile::{Profile, ProfileField, Role};
pub use service::{rating_stars, ServiceDetail};
pub use signup::SignupRequest;
pub use validation::{is_strong_password, is_valid_email, FieldStatus, ValidationState};
