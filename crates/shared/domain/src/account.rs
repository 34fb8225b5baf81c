//! Account draft composed by the registration form.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    ACCOUNT_KIND_INDIVIDUAL, ACCOUNT_KIND_PROVIDER, MEMBERSHIP_FREE, MEMBERSHIP_GOLD,
    MEMBERSHIP_SILVER,
};
use crate::error::{DomainError, DomainResult};
use crate::location::{CityId, NeighborhoodId};

/// Which registration form is being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Service provider ("empleador")
    Provider,
    /// Customer ("usuario")
    Individual,
}

impl AccountKind {
    pub fn is_provider(&self) -> bool {
        matches!(self, AccountKind::Provider)
    }
}

impl FromStr for AccountKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ACCOUNT_KIND_PROVIDER => Ok(AccountKind::Provider),
            ACCOUNT_KIND_INDIVIDUAL => Ok(AccountKind::Individual),
            other => Err(DomainError::validation(format!(
                "unknown account type '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::Provider => write!(f, "{}", ACCOUNT_KIND_PROVIDER),
            AccountKind::Individual => write!(f, "{}", ACCOUNT_KIND_INDIVIDUAL),
        }
    }
}

/// Membership tier offered to providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipTier {
    #[default]
    #[serde(rename = "GRATUITA")]
    Free,
    #[serde(rename = "PLATA")]
    Silver,
    #[serde(rename = "ORO")]
    Gold,
}

impl MembershipTier {
    /// Map a position of the 1..=3 membership slider.
    pub fn from_slider(position: u8) -> Option<Self> {
        match position {
            1 => Some(MembershipTier::Free),
            2 => Some(MembershipTier::Silver),
            3 => Some(MembershipTier::Gold),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            MembershipTier::Free => MEMBERSHIP_FREE,
            MembershipTier::Silver => MEMBERSHIP_SILVER,
            MembershipTier::Gold => MEMBERSHIP_GOLD,
        }
    }
}

impl FromStr for MembershipTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            MEMBERSHIP_FREE | "FREE" => Ok(MembershipTier::Free),
            MEMBERSHIP_SILVER | "SILVER" => Ok(MembershipTier::Silver),
            MEMBERSHIP_GOLD | "GOLD" => Ok(MembershipTier::Gold),
            other => Err(DomainError::validation(format!(
                "unknown membership tier '{}'",
                other
            ))),
        }
    }
}

/// Account being composed in the registration form.
#[derive(Clone, Default, PartialEq, Eq, Validate)]
pub struct AccountDraft {
    /// Username, stored lowercased
    #[validate(length(min = 5, max = 15, message = "username must be between 5 and 15 characters"))]
    pub id: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub given_name: String,
    pub family_name: String,
    pub city: Option<CityId>,
    /// Selected neighborhoods (providers only). `None` until a lookup succeeds.
    pub neighborhoods: Option<BTreeSet<NeighborhoodId>>,
    pub membership: MembershipTier,
}

// Don't expose passwords in debug output (security)
impl std::fmt::Debug for AccountDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountDraft")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("password_confirmation", &"[REDACTED]")
            .field("given_name", &self.given_name)
            .field("family_name", &self.family_name)
            .field("city", &self.city)
            .field("neighborhoods", &self.neighborhoods)
            .field("membership", &self.membership)
            .finish()
    }
}

/// One update to the account draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountField {
    Id(String),
    Email(String),
    Password(String),
    PasswordConfirmation(String),
    GivenName(String),
    FamilyName(String),
    City(CityId),
    Membership(MembershipTier),
}

impl AccountField {
    /// Parse a `(name, value)` pair coming from a bound input.
    ///
    /// Names follow the backend form keys; unknown names are rejected.
    pub fn from_input(name: &str, value: &str) -> DomainResult<Self> {
        match name {
            "id" => Ok(AccountField::Id(value.to_string())),
            "email" => Ok(AccountField::Email(value.to_string())),
            "password" => Ok(AccountField::Password(value.to_string())),
            "passwordDobleCheck" => Ok(AccountField::PasswordConfirmation(value.to_string())),
            "nombre" => Ok(AccountField::GivenName(value.to_string())),
            "apellido" => Ok(AccountField::FamilyName(value.to_string())),
            "ciudad" => value
                .trim()
                .parse()
                .map(AccountField::City)
                .map_err(|_| DomainError::validation("city must be a numeric identifier")),
            "membresia" => value.parse().map(AccountField::Membership),
            other => Err(DomainError::unknown_field(other)),
        }
    }
}

impl AccountDraft {
    /// Merge one field into the draft.
    pub fn apply(&mut self, field: AccountField) {
        match field {
            AccountField::Id(v) => self.id = v.to_lowercase(),
            AccountField::Email(v) => self.email = v,
            AccountField::Password(v) => self.password = v,
            AccountField::PasswordConfirmation(v) => self.password_confirmation = v,
            AccountField::GivenName(v) => self.given_name = v,
            AccountField::FamilyName(v) => self.family_name = v,
            AccountField::City(v) => self.city = Some(v),
            AccountField::Membership(v) => self.membership = v,
        }
    }

    /// Password and confirmation compared verbatim.
    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirmation
    }

    /// Reset free-text inputs. Selections (city, neighborhoods, tier) are kept.
    pub fn clear_text_inputs(&mut self) {
        self.id.clear();
        self.given_name.clear();
        self.family_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_IDENTIFIER_LENGTH, MIN_IDENTIFIER_LENGTH};

    #[test]
    fn test_identifier_length_bounds() {
        let with_len = |n: u64| AccountDraft {
            id: "a".repeat(n as usize),
            ..Default::default()
        };

        assert!(with_len(MIN_IDENTIFIER_LENGTH).validate().is_ok());
        assert!(with_len(MAX_IDENTIFIER_LENGTH).validate().is_ok());
        assert!(with_len(MIN_IDENTIFIER_LENGTH - 1).validate().is_err());
        assert!(with_len(MAX_IDENTIFIER_LENGTH + 1).validate().is_err());
    }

    #[test]
    fn test_identifier_is_lowercased() {
        let mut draft = AccountDraft::default();
        draft.apply(AccountField::Id("JoeSmith".into()));
        assert_eq!(draft.id, "joesmith");
    }

    #[test]
    fn test_identifier_length_rules() {
        let mut draft = AccountDraft::default();
        assert!(draft.validate().is_err(), "empty identifier is required");

        draft.apply(AccountField::Id("joe".into()));
        assert!(draft.validate().is_err());

        draft.apply(AccountField::Id("joe123".into()));
        assert!(draft.validate().is_ok());

        draft.apply(AccountField::Id("a".repeat(16)));
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_from_input_known_and_unknown() {
        assert_eq!(
            AccountField::from_input("ciudad", "3").unwrap(),
            AccountField::City(3)
        );
        assert_eq!(
            AccountField::from_input("passwordDobleCheck", "x").unwrap(),
            AccountField::PasswordConfirmation("x".into())
        );
        assert!(AccountField::from_input("ciudad", "").is_err());
        assert!(matches!(
            AccountField::from_input("roles", "admin"),
            Err(DomainError::UnknownField(_))
        ));
    }

    #[test]
    fn test_membership_slider_and_wire() {
        assert_eq!(MembershipTier::from_slider(1), Some(MembershipTier::Free));
        assert_eq!(MembershipTier::from_slider(3), Some(MembershipTier::Gold));
        assert_eq!(MembershipTier::from_slider(4), None);
        assert_eq!(MembershipTier::default(), MembershipTier::Free);

        let json = serde_json::to_value(MembershipTier::Silver).unwrap();
        assert_eq!(json, "PLATA");
        assert_eq!("oro".parse::<MembershipTier>().unwrap(), MembershipTier::Gold);
    }

    #[test]
    fn test_account_kind_parsing() {
        assert_eq!("empleador".parse::<AccountKind>().unwrap(), AccountKind::Provider);
        assert_eq!("usuario".parse::<AccountKind>().unwrap(), AccountKind::Individual);
        assert!("admin".parse::<AccountKind>().is_err());
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let mut draft = AccountDraft::default();
        draft.apply(AccountField::Password("Secret123".into()));
        let output = format!("{:?}", draft);
        assert!(!output.contains("Secret123"));
        assert!(output.contains("[REDACTED]"));
    }
}
