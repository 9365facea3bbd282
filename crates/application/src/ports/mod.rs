//! Ports implemented by the infrastructure layer

pub mod host_command;
pub mod quote_store;

pub use host_command::{HostCommandPort, PullOutput};
pub use quote_store::QuoteStorePort;
