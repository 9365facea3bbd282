//! Application layer - Use cases and orchestration
//!
//! Contains the moderation and maintenance services and the port
//! definitions implemented by the infrastructure layer.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
