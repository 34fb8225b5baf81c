//! City and neighborhood reference data served by the backend.

use serde::{Deserialize, Serialize};

pub type CityId = i64;
pub type NeighborhoodId = i64;

/// City entry for the city selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// Neighborhood scoped to one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: NeighborhoodId,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "codigoPostal", default)]
    pub postal_code: String,
}

/// Body of the per-city lookup (`GET /cities/{id}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityNeighborhoods {
    #[serde(rename = "barrios", default)]
    pub neighborhoods: Vec<Neighborhood>,
}
