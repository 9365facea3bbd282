//! Repository synchronization handler
//!
//! `POST /api/git/pull` runs the configured pull command against the
//! content repository and reports its output verbatim.

use application::ApplicationError;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Pull response body
///
/// `output` carries stdout on success, `error` carries stderr or the
/// invocation exception on failure.
#[derive(Debug, Clone, Serialize)]
pub struct PullResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pull the content repository
pub async fn pull(State(state): State<AppState>) -> (StatusCode, Json<PullResponse>) {
    match state.maintenance.pull_repo().await {
        Ok(output) => (
            StatusCode::OK,
            Json(PullResponse {
                success: true,
                message: "Git pull successful".to_string(),
                output: Some(output.stdout),
                error: None,
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Repository pull failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PullResponse {
                    success: false,
                    message: "Git pull failed".to_string(),
                    output: None,
                    error: Some(diagnostic_text(&e)),
                }),
            )
        }
    }
}

/// Strip the error wrapper so the client sees the raw diagnostic
fn diagnostic_text(err: &ApplicationError) -> String {
    match err {
        ApplicationError::CommandFailed(msg) => msg.clone(),
        other => other.to_string(),
    }
}
