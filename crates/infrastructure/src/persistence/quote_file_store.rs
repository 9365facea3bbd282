//! File-backed quote store
//!
//! Each collection is one flat JSON array on disk, fully rewritten on every
//! change. The store deliberately degrades instead of failing: a missing or
//! unreadable file reads as an empty collection, and write failures come
//! back as plain error values with the I/O detail kept in the logs. For a
//! single-operator wall, a reachable endpoint beats a precise storage error.

use async_trait::async_trait;
use domain::{CollectionKind, Quote};
use tracing::{debug, error};

use application::{ApplicationError, ports::QuoteStorePort};

use crate::config::StorageConfig;

/// Quote store over three flat JSON files
#[derive(Debug, Clone)]
pub struct FileQuoteStore {
    storage: StorageConfig,
}

impl FileQuoteStore {
    /// Create a store over the configured collection paths
    #[must_use]
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl QuoteStorePort for FileQuoteStore {
    async fn read(&self, kind: CollectionKind) -> Vec<Quote> {
        let path = self.storage.path_for(kind);

        let raw = match tokio::fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(collection = %kind, path = %path.display(), "No backing file, reading as empty");
                return Vec::new();
            }
            Err(e) => {
                error!(collection = %kind, path = %path.display(), error = %e, "Failed to read collection file");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(quotes) => quotes,
            Err(e) => {
                error!(collection = %kind, path = %path.display(), error = %e, "Collection file is not a JSON array, reading as empty");
                Vec::new()
            }
        }
    }

    async fn write(&self, kind: CollectionKind, quotes: &[Quote]) -> Result<(), ApplicationError> {
        let path = self.storage.path_for(kind);

        let serialized = match serde_json::to_vec_pretty(quotes) {
            Ok(serialized) => serialized,
            Err(e) => {
                error!(collection = %kind, error = %e, "Failed to serialize collection");
                return Err(ApplicationError::Internal(format!(
                    "serialize {kind}: {e}"
                )));
            }
        };

        if let Err(e) = tokio::fs::write(path, serialized).await {
            error!(collection = %kind, path = %path.display(), error = %e, "Failed to write collection file");
            return Err(ApplicationError::Internal(format!("write {kind}: {e}")));
        }

        debug!(collection = %kind, count = quotes.len(), "Collection file written");
        Ok(())
    }
}
