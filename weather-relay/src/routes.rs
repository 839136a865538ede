//! Route definitions

use axum::{Router, extract::Request, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

pub const WEATHER_PATH: &str = "/myapi/weather";

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(WEATHER_PATH, get(handlers::get_weather))
        // Path only: the query string carries the caller's API key.
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
            tracing::info_span!("request", method = %req.method(), path = %req.uri().path())
        }))
        .with_state(state)
}
