//! QuoteWall HTTP presentation layer
//!
//! This crate provides the HTTP API for the quote wall backend.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{ApiKeyAuthLayer, RequestIdLayer};
pub use routes::{create_app, create_router};
pub use state::AppState;
