//! Core library for the weather relay.
//!
//! This crate defines:
//! - The OpenWeatherMap condition-code table and its lookups
//! - Abstraction over the weather provider, with an OpenWeather client
//! - Summary assembly and shared domain models
//! - Configuration handling
//!
//! It is used by `weather-relay`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod model;
pub mod provider;
pub mod summary;

pub use condition::{WeatherCondition, get_condition, get_group, get_icon_url};
pub use config::{Config, OpenWeatherConfig, ServerConfig};
pub use model::{CurrentConditions, WeatherRequest, WeatherSummary};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use summary::fetch_summary;
