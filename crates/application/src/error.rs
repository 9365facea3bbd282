//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request validation failed
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A collection file could not be written
    ///
    /// The message names the failed side of a move ("source" or
    /// "destination"); I/O details stay in the logs.
    #[error("Failed to update {0} file")]
    Storage(String),

    /// An external host command failed to launch, timed out, or exited
    /// non-zero
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Storage failure on the source side of a move
    #[must_use]
    pub fn source_write() -> Self {
        Self::Storage("source".to_string())
    }

    /// Storage failure on the destination side of a move
    #[must_use]
    pub fn destination_write() -> Self {
        Self::Storage("destination".to_string())
    }
}
