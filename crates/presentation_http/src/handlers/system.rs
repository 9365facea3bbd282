//! Host system handler
//!
//! `POST /api/system/reboot` launches the configured reboot command without
//! awaiting it. A success response only means the launch worked; the host
//! may go down before or after the response reaches the client.

use application::ApplicationError;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Reboot response body
#[derive(Debug, Clone, Serialize)]
pub struct RebootResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Launch a host reboot
pub async fn reboot(State(state): State<AppState>) -> (StatusCode, Json<RebootResponse>) {
    match state.maintenance.reboot().await {
        Ok(()) => (
            StatusCode::OK,
            Json(RebootResponse {
                success: true,
                message: "Reboot initiated".to_string(),
                error: None,
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Reboot launch failed");
            let error = match e {
                ApplicationError::CommandFailed(msg) => msg,
                other => other.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RebootResponse {
                    success: false,
                    message: "Reboot failed".to_string(),
                    error: Some(error),
                }),
            )
        }
    }
}
