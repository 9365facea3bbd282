//! Application state shared across handlers

use std::sync::Arc;

use application::{MaintenanceService, ModerationService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Moderation service for listing and moving quotes
    pub moderation: Arc<ModerationService>,
    /// Maintenance service for repository pull and host reboot
    pub maintenance: Arc<MaintenanceService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
