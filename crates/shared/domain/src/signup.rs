//! Signup request sent to `POST /auth/signup`.

use serde::Serialize;

use crate::account::{AccountDraft, AccountKind, MembershipTier};
use crate::address::AddressDraft;
use crate::location::{CityId, Neighborhood};

/// Wire payload for a new account.
///
/// `barrios` is omitted entirely for individual accounts, `membresia` is
/// serialized as `null` for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub id: String,
    #[serde(rename = "nombre")]
    pub given_name: String,
    #[serde(rename = "apellido")]
    pub family_name: String,
    #[serde(rename = "ciudad")]
    pub city: Option<CityId>,
    #[serde(rename = "barrios", skip_serializing_if = "Option::is_none")]
    pub neighborhoods: Option<Vec<Neighborhood>>,
    #[serde(rename = "direcciones")]
    pub addresses: Vec<AddressDraft>,
    pub email: String,
    #[serde(rename = "contrasena")]
    pub password: String,
    #[serde(rename = "membresia")]
    pub membership: Option<MembershipTier>,
}

impl SignupRequest {
    /// Build the payload for the given account type.
    ///
    /// Provider neighborhoods are the loaded ones whose ids are selected, in
    /// loaded order. Selections missing from `loaded` are dropped.
    pub fn compose(
        kind: AccountKind,
        account: &AccountDraft,
        address: &AddressDraft,
        loaded: &[Neighborhood],
    ) -> Self {
        let (neighborhoods, membership) = match kind {
            AccountKind::Provider => {
                let selected = account
                    .neighborhoods
                    .as_ref()
                    .map(|ids| {
                        loaded
                            .iter()
                            .filter(|n| ids.contains(&n.id))
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                (Some(selected), Some(account.membership))
            }
            AccountKind::Individual => (None, None),
        };

        Self {
            id: account.id.clone(),
            given_name: account.given_name.clone(),
            family_name: account.family_name.clone(),
            city: account.city,
            neighborhoods,
            addresses: vec![address.clone()],
            email: account.email.clone(),
            password: account.password.clone(),
            membership,
        }
    }

    /// Ids of the neighborhoods included in the payload.
    pub fn neighborhood_ids(&self) -> Vec<i64> {
        self.neighborhoods
            .as_ref()
            .map(|list| list.iter().map(|n| n.id).collect())
            .unwrap_or_default()
    }
}
