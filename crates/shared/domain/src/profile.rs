//! Profile of a signed-in user.

use serde::{Deserialize, Serialize};

/// Role badge attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// User profile as kept in the session context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub given_name: String,
    #[serde(rename = "apellido", default)]
    pub family_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "ciudad", default)]
    pub city: Option<i64>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// One editable profile field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileField {
    GivenName(String),
    FamilyName(String),
    Email(String),
    City(i64),
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
            .trim()
            .to_string()
    }

    /// Role badges, upper-cased for display.
    pub fn role_badges(&self) -> Vec<String> {
        self.roles
            .iter()
            .map(|r| r.description.to_uppercase())
            .collect()
    }

    pub fn apply(&mut self, field: ProfileField) {
        match field {
            ProfileField::GivenName(v) => self.given_name = v,
            ProfileField::FamilyName(v) => self.family_name = v,
            ProfileField::Email(v) => self.email = v,
            ProfileField::City(v) => self.city = Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_helpers() {
        let profile = Profile {
            id: "ana01".into(),
            given_name: "Ana".into(),
            family_name: "Perez".into(),
            roles: vec![Role {
                id: 1,
                description: "prestador".into(),
            }],
            ..Default::default()
        };

        assert_eq!(profile.full_name(), "Ana Perez");
        assert_eq!(profile.role_badges(), vec!["PRESTADOR".to_string()]);
    }

    #[test]
    fn test_full_name_without_family_name() {
        let profile = Profile {
            given_name: "Ana".into(),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "Ana");
    }
}
