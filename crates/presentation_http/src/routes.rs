//! Route definitions and service assembly

use axum::{
    Router,
    routing::{get, post},
};
use secrecy::SecretString;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers,
    middleware::{ApiKeyAuthLayer, RequestIdLayer},
    state::AppState,
};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint (excluded from auth)
        .route("/health", get(handlers::health::health_check))
        // Quote moderation API
        .route("/api/quotes", get(handlers::quotes::list_quotes))
        .route("/api/quotes/move", post(handlers::quotes::move_quote))
        // Repository synchronization
        .route("/api/git/pull", post(handlers::git::pull))
        // Host maintenance
        .route("/api/system/reboot", post(handlers::system::reboot))
        // Attach state
        .with_state(state)
}

/// Wrap the router in the full middleware stack
///
/// `Router::layer` nests outside-in: the last layer added is outermost.
/// CORS must sit outside the key gate so browser preflight `OPTIONS`
/// requests, which carry no `X-API-Key`, get answered instead of
/// rejected with 401.
pub fn create_app(state: AppState, cors: CorsLayer, api_key: Option<SecretString>) -> Router {
    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
        .layer(ApiKeyAuthLayer::new(api_key))
        .layer(cors)
}
