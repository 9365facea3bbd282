//! Host command adapters

pub mod host_command_runner;

pub use host_command_runner::HostCommandRunner;
