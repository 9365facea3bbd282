//! Security configuration: the shared API secret.

use secrecy::SecretString;
use serde::Deserialize;

/// Security configuration
///
/// A single static secret guards every `/api` route. There is no rotation,
/// scoping, or rate limiting; the wall is a single-operator tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    /// Shared secret expected in the `X-API-Key` header
    ///
    /// When unset, every protected request is rejected; the server refuses
    /// to run open by accident.
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

impl SecurityConfig {
    /// Whether an API key has been configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
