//! Quote moderation handlers
//!
//! `GET /api/quotes` lists all three collections verbatim;
//! `POST /api/quotes/move` transfers one approved entry by position.

use application::CollectionsSnapshot;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use domain::MoveDestination;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// List all three collections
pub async fn list_quotes(State(state): State<AppState>) -> Json<CollectionsSnapshot> {
    Json(state.moderation.list().await)
}

/// Move request body
///
/// Fields are optional so an incomplete body reaches the missing-parameter
/// check instead of failing deserialization; `index` is signed so negative
/// values reach the range check.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveQuoteRequest {
    #[serde(default)]
    pub index: Option<i64>,
    #[serde(default)]
    pub destination: Option<String>,
}

/// Move response body
#[derive(Debug, Clone, Serialize)]
pub struct MoveQuoteResponse {
    pub success: bool,
    pub message: String,
}

/// Move one approved entry to `quotes` or `removed`
pub async fn move_quote(
    State(state): State<AppState>,
    payload: Result<Json<MoveQuoteRequest>, JsonRejection>,
) -> Result<Json<MoveQuoteResponse>, ApiError> {
    let Ok(Json(request)) = payload else {
        debug!("Move request body missing or malformed");
        return Err(ApiError::BadRequest("Missing required parameters".to_string()));
    };

    let (Some(index), Some(destination)) = (request.index, request.destination) else {
        return Err(ApiError::BadRequest("Missing required parameters".to_string()));
    };

    let destination = MoveDestination::parse(&destination)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let moved_to = state.moderation.move_quote(index, destination).await?;

    Ok(Json(MoveQuoteResponse {
        success: true,
        message: format!("Quote moved to {moved_to}"),
    }))
}
