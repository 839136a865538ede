use crate::{
    Config,
    model::{CurrentConditions, WeatherRequest},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Source of current-weather observations.
///
/// Implementations are shared read-only across concurrent requests.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_conditions(
        &self,
        request: &WeatherRequest,
    ) -> anyhow::Result<CurrentConditions>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> Arc<dyn WeatherProvider> {
    Arc::new(OpenWeatherProvider::with_base_url(config.openweather.base_url.clone()))
}
