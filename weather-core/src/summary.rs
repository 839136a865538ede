//! Assembles the flattened summary from a provider observation.

use anyhow::Result;
use tracing::{info, instrument};

use crate::{
    condition::{get_group, get_icon_url},
    model::{CurrentConditions, WeatherRequest, WeatherSummary},
    provider::WeatherProvider,
};

impl WeatherSummary {
    /// Classify the condition code and combine it with the observed scalars.
    ///
    /// Unknown codes leave `group_description` and `icon_url` empty. The icon
    /// is always the day variant.
    pub fn from_conditions(current: CurrentConditions) -> Self {
        let code = current.condition_code;

        Self {
            location_name: current.location_name,
            temp: current.temperature_c,
            humidity: current.humidity_pct,
            group_description: get_group(code).map(str::to_string),
            icon_url: get_icon_url(code, true),
        }
    }
}

/// Fetch current conditions and build a fresh summary for this request.
#[instrument(skip_all, fields(lat = %request.lat, lon = %request.lon))]
pub async fn fetch_summary(
    provider: &dyn WeatherProvider,
    request: &WeatherRequest,
) -> Result<WeatherSummary> {
    let current = provider.current_conditions(request).await?;
    let code = current.condition_code;
    let summary = WeatherSummary::from_conditions(current);

    if summary.group_description.is_none() {
        info!(code, "Unclassified condition code");
    }

    Ok(summary)
}
