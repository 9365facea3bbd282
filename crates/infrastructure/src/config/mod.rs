//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP bind address, CORS, shutdown
//! - `security`: the shared API secret
//! - `storage`: paths of the three collection files
//! - `host`: content repository and host command settings
//!
//! Values layer as defaults < `config.toml` < `QUOTEWALL_*` environment
//! variables, so the whole configuration is injected at process start and
//! nothing is hardcoded in handlers. Environment keys nest with a double
//! underscore so single underscores stay inside field names:
//! `QUOTEWALL_SECURITY__API_KEY` maps to `security.api_key`.

mod host;
mod security;
mod server;
mod storage;

use serde::Deserialize;

pub use host::HostConfig;
pub use security::SecurityConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Security configuration
    #[serde(default)]
    pub security: SecurityConfig,

    /// Collection file paths
    #[serde(default)]
    pub storage: StorageConfig,

    /// Host command configuration
    #[serde(default)]
    pub host: HostConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., QUOTEWALL_SERVER__PORT)
            .add_source(Self::env_source(None));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Environment source, optionally fed from an explicit variable map
    ///
    /// Nesting uses `__` so field names like `api_key` and
    /// `pull_timeout_secs` stay addressable.
    fn env_source(vars: Option<config::Map<String, String>>) -> config::Environment {
        config::Environment::with_prefix("QUOTEWALL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars)
    }
}
