//! Host maintenance service
//!
//! Thin delegation over the host command port: pull the content repository,
//! reboot the host. No retries, no queuing.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::ApplicationError;
use crate::ports::{HostCommandPort, PullOutput};

/// Service for repository synchronization and host reboot
pub struct MaintenanceService {
    host: Arc<dyn HostCommandPort>,
}

impl std::fmt::Debug for MaintenanceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintenanceService").finish_non_exhaustive()
    }
}

impl MaintenanceService {
    /// Create a new maintenance service backed by the given host port
    #[must_use]
    pub fn new(host: Arc<dyn HostCommandPort>) -> Self {
        Self { host }
    }

    /// Pull the content repository, waiting for the command to finish
    #[instrument(skip(self))]
    pub async fn pull_repo(&self) -> Result<PullOutput, ApplicationError> {
        let output = self.host.pull().await?;
        info!("Repository pull completed");
        Ok(output)
    }

    /// Launch a host reboot without awaiting its completion
    #[instrument(skip(self))]
    pub async fn reboot(&self) -> Result<(), ApplicationError> {
        self.host.schedule_reboot().await?;
        info!("Reboot command launched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct MockHost {
        pull_result: Result<String, String>,
        reboot_ok: bool,
    }

    #[async_trait]
    impl HostCommandPort for MockHost {
        async fn pull(&self) -> Result<PullOutput, ApplicationError> {
            match &self.pull_result {
                Ok(stdout) => Ok(PullOutput {
                    stdout: stdout.clone(),
                }),
                Err(stderr) => Err(ApplicationError::CommandFailed(stderr.clone())),
            }
        }

        async fn schedule_reboot(&self) -> Result<(), ApplicationError> {
            if self.reboot_ok {
                Ok(())
            } else {
                Err(ApplicationError::CommandFailed(
                    "No such file or directory".to_string(),
                ))
            }
        }
    }

    #[tokio::test]
    async fn pull_repo_passes_stdout_through() {
        let service = MaintenanceService::new(Arc::new(MockHost {
            pull_result: Ok("Already up to date.\n".to_string()),
            reboot_ok: true,
        }));
        let output = service.pull_repo().await.unwrap();
        assert_eq!(output.stdout, "Already up to date.\n");
    }

    #[tokio::test]
    async fn pull_repo_surfaces_command_failure() {
        let service = MaintenanceService::new(Arc::new(MockHost {
            pull_result: Err("fatal: not a git repository".to_string()),
            reboot_ok: true,
        }));
        let err = service.pull_repo().await.unwrap_err();
        assert!(err.to_string().contains("not a git repository"));
    }

    #[tokio::test]
    async fn reboot_reports_launch_success() {
        let service = MaintenanceService::new(Arc::new(MockHost {
            pull_result: Ok(String::new()),
            reboot_ok: true,
        }));
        assert!(service.reboot().await.is_ok());
    }

    #[tokio::test]
    async fn reboot_surfaces_launch_failure() {
        let service = MaintenanceService::new(Arc::new(MockHost {
            pull_result: Ok(String::new()),
            reboot_ok: false,
        }));
        assert!(service.reboot().await.is_err());
    }
}
