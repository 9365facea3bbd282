//! HTTP middleware components
//!
//! Authentication and request correlation; both wrap the whole router.

pub mod auth;
pub mod request_id;

pub use auth::{ApiKeyAuth, ApiKeyAuthLayer};
pub use request_id::RequestIdLayer;
