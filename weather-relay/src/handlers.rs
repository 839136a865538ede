//! Request handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use weather_core::{WeatherRequest, WeatherSummary, fetch_summary};

use crate::{error::ApiError, state::AppState};

/// Query string of the weather lookup. Values are forwarded as-is.
///
/// The key may be given as `API_KEY` or `appid`; `API_KEY` wins when both are present.
#[derive(Deserialize)]
pub struct WeatherQuery {
    pub lat: String,
    pub lon: String,
    #[serde(rename = "API_KEY")]
    pub api_key: Option<String>,
    pub appid: Option<String>,
}

impl TryFrom<WeatherQuery> for WeatherRequest {
    type Error = ApiError;

    fn try_from(q: WeatherQuery) -> Result<Self, Self::Error> {
        let api_key = q
            .api_key
            .or(q.appid)
            .ok_or_else(|| ApiError::BadRequest("missing query parameter `API_KEY`".into()))?;

        Ok(WeatherRequest::new(q.lat, q.lon, api_key))
    }
}

/// `GET /myapi/weather?lat=..&lon=..&API_KEY=..`
#[instrument(skip_all)]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherSummary>, ApiError> {
    let request = WeatherRequest::try_from(query)?;

    let summary = fetch_summary(state.provider.as_ref(), &request)
        .await
        .map_err(|e| ApiError::internal(&e, state.expose_error_details))?;

    Ok(Json(summary))
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
