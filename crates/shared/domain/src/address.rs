//! Address draft submitted alongside every new account.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Address being composed in the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDraft {
    #[serde(rename = "calle")]
    pub street: String,
    #[serde(rename = "altura")]
    pub street_number: u32,
    #[serde(rename = "piso")]
    pub floor: String,
    #[serde(rename = "departamento")]
    pub unit: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// One update to the address draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressField {
    Street(String),
    StreetNumber(u32),
    Floor(String),
    Unit(String),
    Description(String),
}

impl AddressField {
    /// Parse a `(name, value)` pair coming from a bound input.
    ///
    /// Names follow the backend keys. An empty street number means 0.
    pub fn from_input(name: &str, value: &str) -> DomainResult<Self> {
        match name {
            "calle" => Ok(AddressField::Street(value.to_string())),
            "altura" => parse_street_number(value).map(AddressField::StreetNumber),
            "piso" => Ok(AddressField::Floor(value.to_string())),
            "departamento" => Ok(AddressField::Unit(value.to_string())),
            "descripcion" => Ok(AddressField::Description(value.to_string())),
            other => Err(DomainError::unknown_field(other)),
        }
    }
}

fn parse_street_number(value: &str) -> DomainResult<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| DomainError::validation("street number must be a non-negative integer"))
}

impl AddressDraft {
    /// Merge one field into the draft.
    pub fn apply(&mut self, field: AddressField) {
        match field {
            AddressField::Street(v) => self.street = v,
            AddressField::StreetNumber(v) => self.street_number = v,
            AddressField::Floor(v) => self.floor = v,
            AddressField::Unit(v) => self.unit = v,
            AddressField::Description(v) => self.description = v,
        }
    }

    /// Reset every input to its empty value.
    pub fn clear(&mut self) {
        *self = AddressDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_number_parsing() {
        assert_eq!(
            AddressField::from_input("altura", "1234").unwrap(),
            AddressField::StreetNumber(1234)
        );
        assert_eq!(
            AddressField::from_input("altura", "").unwrap(),
            AddressField::StreetNumber(0)
        );
        assert!(AddressField::from_input("altura", "-3").is_err());
        assert!(AddressField::from_input("altura", "abc").is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = AddressField::from_input("zip", "1824");
        assert_eq!(result, Err(DomainError::unknown_field("zip")));
    }

    #[test]
    fn test_wire_keys() {
        let mut draft = AddressDraft::default();
        draft.apply(AddressField::Street("Mitre".into()));
        draft.apply(AddressField::StreetNumber(742));

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["calle"], "Mitre");
        assert_eq!(json["altura"], 742);
        assert_eq!(json["piso"], "");
        assert_eq!(json["departamento"], "");
    }
}
