//! Content repository and host command settings.

use std::path::PathBuf;

use serde::Deserialize;

/// Host command configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    /// Working directory of the content repository
    #[serde(default = "default_repo_path")]
    pub repo_path: PathBuf,

    /// Command run to synchronize the repository
    #[serde(default = "default_pull_command")]
    pub pull_command: Vec<String>,

    /// Bounded wait for the pull command, in seconds
    #[serde(default = "default_pull_timeout")]
    pub pull_timeout_secs: u64,

    /// Command launched to reboot the host
    ///
    /// Needs the appropriate sudoers entry on the Pi. A deferring command
    /// (e.g. `systemd-run --on-active=2 reboot`) buys time for the HTTP
    /// response to flush before the host goes down.
    #[serde(default = "default_reboot_command")]
    pub reboot_command: Vec<String>,
}

fn default_repo_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_pull_command() -> Vec<String> {
    vec!["git".to_string(), "pull".to_string()]
}

const fn default_pull_timeout() -> u64 {
    30
}

fn default_reboot_command() -> Vec<String> {
    vec!["sudo".to_string(), "reboot".to_string()]
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            repo_path: default_repo_path(),
            pull_command: default_pull_command(),
            pull_timeout_secs: default_pull_timeout(),
            reboot_command: default_reboot_command(),
        }
    }
}
