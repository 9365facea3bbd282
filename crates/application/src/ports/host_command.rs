//! Port for host-level command execution
//!
//! Two fixed operations: synchronizing the content repository and rebooting
//! the host. Both are shell-outs; neither is retried.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Captured output of a successful repository pull
#[derive(Debug, Clone)]
pub struct PullOutput {
    /// Standard output of the pull command, verbatim
    pub stdout: String,
}

/// Port for invoking external host commands
#[async_trait]
pub trait HostCommandPort: Send + Sync {
    /// Run the configured pull command in the content repository
    ///
    /// Waits for completion with a bounded timeout. A non-zero exit returns
    /// `CommandFailed` carrying the command's stderr; a launch failure or
    /// timeout returns `CommandFailed` carrying the exception text.
    async fn pull(&self) -> Result<PullOutput, ApplicationError>;

    /// Launch the privileged reboot command without awaiting completion
    ///
    /// Fire-and-forget: the command may take the host down before it would
    /// ever report back, so only the launch itself is observable. The child
    /// process is never awaited by the caller.
    async fn schedule_reboot(&self) -> Result<(), ApplicationError>;
}
