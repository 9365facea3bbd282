//! Application services

pub mod maintenance_service;
pub mod moderation_service;

pub use maintenance_service::MaintenanceService;
pub use moderation_service::{CollectionsSnapshot, ModerationService};
