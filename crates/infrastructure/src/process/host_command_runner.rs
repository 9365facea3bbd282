//! Host command runner
//!
//! Shells out for the two maintenance operations. The pull waits for
//! completion under a timeout and captures both output streams; the reboot
//! is launched and immediately detached, since a successful reboot takes
//! the host (and this process) down before any exit status could be read.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use application::{
    ApplicationError,
    ports::{HostCommandPort, PullOutput},
};

use crate::config::HostConfig;

/// Runner for the configured pull and reboot commands
#[derive(Debug, Clone)]
pub struct HostCommandRunner {
    host: HostConfig,
}

impl HostCommandRunner {
    /// Create a runner over the given host configuration
    #[must_use]
    pub fn new(host: HostConfig) -> Self {
        Self { host }
    }

    fn command_from(parts: &[String]) -> Result<Command, ApplicationError> {
        let (program, args) = parts.split_first().ok_or_else(|| {
            ApplicationError::Internal("empty host command configured".to_string())
        })?;
        let mut cmd = Command::new(program);
        cmd.args(args);
        Ok(cmd)
    }
}

#[async_trait]
impl HostCommandPort for HostCommandRunner {
    #[instrument(skip(self), fields(repo = %self.host.repo_path.display()))]
    async fn pull(&self) -> Result<PullOutput, ApplicationError> {
        let mut cmd = Self::command_from(&self.host.pull_command)?;
        cmd.current_dir(&self.host.repo_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let wait = Duration::from_secs(self.host.pull_timeout_secs);
        let output = match timeout(wait, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                warn!(error = %e, "Pull command failed to launch");
                return Err(ApplicationError::CommandFailed(e.to_string()));
            }
            Err(_) => {
                warn!(timeout_secs = self.host.pull_timeout_secs, "Pull command timed out");
                return Err(ApplicationError::CommandFailed(format!(
                    "command timed out after {}s",
                    self.host.pull_timeout_secs
                )));
            }
        };

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            info!("Pull command succeeded");
            Ok(PullOutput { stdout })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(status = %output.status, "Pull command exited non-zero");
            Err(ApplicationError::CommandFailed(stderr))
        }
    }

    #[instrument(skip(self))]
    async fn schedule_reboot(&self) -> Result<(), ApplicationError> {
        let mut cmd = Self::command_from(&self.host.reboot_command)?;
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let mut child = cmd.spawn().map_err(|e| {
            warn!(error = %e, "Reboot command failed to launch");
            ApplicationError::CommandFailed(e.to_string())
        })?;

        info!("Reboot command launched, not awaiting completion");

        // Deliberately unawaited: reap the child in the background so a
        // reboot that never happens (or a fast-failing command) does not
        // leave a zombie.
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    warn!(%status, "Reboot command exited non-zero");
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "Failed to reap reboot command"),
            }
        });

        Ok(())
    }
}
