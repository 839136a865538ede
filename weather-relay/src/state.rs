use std::sync::Arc;

use weather_core::WeatherProvider;

/// Shared application state. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    /// Include upstream error details in 500 responses.
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider, expose_error_details: false }
    }

    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }
}
