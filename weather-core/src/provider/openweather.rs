use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    config::DEFAULT_OPENWEATHER_BASE_URL,
    model::{CurrentConditions, WeatherRequest},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenWeatherProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_OPENWEATHER_BASE_URL)
    }

    /// Point the provider at a different API root, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip_all, fields(lat = %request.lat, lon = %request.lon))]
    async fn fetch_current(&self, request: &WeatherRequest) -> Result<CurrentConditions> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", request.lat.as_str()),
                ("lon", request.lon.as_str()),
                ("appid", request.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            // The request URL carries the caller's key.
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read OpenWeather current response body")?;

        debug!(%status, bytes = body.len(), "OpenWeather responded");

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let condition_code = parsed
            .weather
            .first()
            .map(|w| w.id)
            .ok_or_else(|| anyhow!("OpenWeather response contained no weather entries"))?;

        Ok(CurrentConditions {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            condition_code,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u16,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_conditions(&self, request: &WeatherRequest) -> Result<CurrentConditions> {
        self.fetch_current(request).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = OpenWeatherProvider::with_base_url("http://example.test/data/2.5/");
        assert_eq!(provider.base_url(), "http://example.test/data/2.5");
    }

    #[test]
    fn default_points_at_openweather() {
        assert_eq!(OpenWeatherProvider::default().base_url(), DEFAULT_OPENWEATHER_BASE_URL);
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_cuts_on_char_boundary() {
        let body = "é".repeat(300);
        let out = truncate_body(&body);

        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
    }

    #[test]
    fn parses_extra_fields_leniently() {
        let body = r#"{
            "coord": {"lon": 13.41, "lat": 52.52},
            "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
            "main": {"temp": 4.2, "feels_like": 1.0, "humidity": 81, "pressure": 1012},
            "name": "Berlin",
            "cod": 200
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.name, "Berlin");
        assert_eq!(parsed.main.humidity, 81);
        assert_eq!(parsed.weather[0].id, 803);
    }
}
