//! HTTP surface of the weather relay.
//!
//! Exposes a single lookup endpoint that forwards coordinates to the
//! configured provider and returns the classified summary.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
