use serde::{Deserialize, Serialize};
use std::fmt;

/// Inbound lookup: coordinates and the caller's OpenWeather key, passed through unvalidated.
#[derive(Clone)]
pub struct WeatherRequest {
    pub lat: String,
    pub lon: String,
    pub api_key: String,
}

impl WeatherRequest {
    pub fn new(lat: impl Into<String>, lon: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { lat: lat.into(), lon: lon.into(), api_key: api_key.into() }
    }
}

impl fmt::Debug for WeatherRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherRequest")
            .field("lat", &self.lat)
            .field("lon", &self.lon)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// The scalars pulled out of a provider's current-weather response.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub location_name: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub condition_code: u16,
}

/// Flattened per-request result returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    #[serde(rename = "locationName")]
    pub location_name: String,
    pub temp: f64,
    pub humidity: u8,
    #[serde(rename = "groupDescription")]
    pub group_description: Option<String>,
    #[serde(rename = "iconURL")]
    pub icon_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_debug_hides_api_key() {
        let req = WeatherRequest::new("52.5", "13.4", "SECRET_KEY");
        let dbg = format!("{req:?}");

        assert!(dbg.contains("52.5"));
        assert!(!dbg.contains("SECRET_KEY"));
    }

    #[test]
    fn summary_serializes_with_wire_names() {
        let summary = WeatherSummary {
            location_name: "Testville".into(),
            temp: 21.5,
            humidity: 60,
            group_description: None,
            icon_url: None,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "locationName": "Testville",
                "temp": 21.5,
                "humidity": 60,
                "groupDescription": null,
                "iconURL": null,
            })
        );
    }
}
