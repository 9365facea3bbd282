//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: file-backed
//! collection storage and host command execution, plus configuration
//! loading.

pub mod config;
pub mod persistence;
pub mod process;

pub use config::{AppConfig, HostConfig, SecurityConfig, ServerConfig, StorageConfig};
pub use persistence::FileQuoteStore;
pub use process::HostCommandRunner;
