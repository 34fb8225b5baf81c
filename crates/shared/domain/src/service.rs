//! Service detail as served by `GET /services/{id}`.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::MAX_RATING_STARS;

/// A service offered by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetail {
    pub id: i64,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "descripcion", default)]
    pub body: String,
    #[serde(rename = "usuarioPrestador", default)]
    pub provider: String,
    #[serde(rename = "disponibilidad", default)]
    pub availability: Option<String>,
    #[serde(rename = "horasEstimadasEjecucion", default)]
    pub estimated_hours: Option<f32>,
    #[serde(rename = "precioPromedio", default)]
    pub average_price: Option<f32>,
    #[serde(rename = "valoracionPromedio", default)]
    pub average_rating: Option<f32>,
    #[serde(rename = "mensajes", default)]
    pub messages: Vec<serde_json::Value>,
    #[serde(
        rename = "fechaCreacion",
        default,
        deserialize_with = "deserialize_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl ServiceDetail {
    /// Average rating rendered as a whole number of stars.
    pub fn stars(&self) -> u8 {
        rating_stars(self.average_rating)
    }
}

/// Round an average rating to 0..=5 stars. Missing ratings render no stars.
pub fn rating_stars(average: Option<f32>) -> u8 {
    match average {
        Some(value) if value.is_finite() => {
            value.round().clamp(0.0, MAX_RATING_STARS as f32) as u8
        }
        _ => 0,
    }
}

/// Accept either epoch milliseconds or an RFC 3339 string.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Millis(ms)) => Ok(Utc.timestamp_millis_opt(ms).single()),
        Some(Raw::Text(text)) => DateTime::parse_from_rfc3339(&text)
            .map(|d| Some(d.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(None), 0);
        assert_eq!(rating_stars(Some(3.4)), 3);
        assert_eq!(rating_stars(Some(3.5)), 4);
        assert_eq!(rating_stars(Some(9.0)), 5);
        assert_eq!(rating_stars(Some(-1.0)), 0);
        assert_eq!(rating_stars(Some(f32::NAN)), 0);
    }

    #[test]
    fn test_service_wire_format() {
        let body = r#"{
            "id": 7,
            "titulo": "Plomeria",
            "descripcion": "Arreglo de canerias",
            "usuarioPrestador": "mario",
            "precioPromedio": 1500.5,
            "valoracionPromedio": 4.2,
            "fechaCreacion": 1590000000000
        }"#;

        let service: ServiceDetail = serde_json::from_str(body).unwrap();
        assert_eq!(service.title, "Plomeria");
        assert_eq!(service.provider, "mario");
        assert_eq!(service.stars(), 4);
        assert!(service.messages.is_empty());
        assert_eq!(service.created_at.unwrap().timestamp(), 1_590_000_000);
    }

    #[test]
    fn test_service_rfc3339_timestamp() {
        let body = r#"{"id": 1, "fechaCreacion": "2020-05-20T18:40:00Z"}"#;
        let service: ServiceDetail = serde_json::from_str(body).unwrap();
        assert_eq!(service.created_at.unwrap().timestamp(), 1_590_000_000);
    }
}
