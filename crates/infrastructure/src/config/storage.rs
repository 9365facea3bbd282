//! Collection file paths.

use std::path::PathBuf;

use domain::CollectionKind;
use serde::Deserialize;

/// Paths of the three collection files
///
/// The pending file is named `quotes.json`, matching its `"quotes"` label
/// on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Pending submissions (`quotes` on the wire)
    #[serde(default = "default_pending_path")]
    pub pending_path: PathBuf,

    /// Approved quotes
    #[serde(default = "default_approved_path")]
    pub approved_path: PathBuf,

    /// Removed quotes
    #[serde(default = "default_removed_path")]
    pub removed_path: PathBuf,
}

fn default_pending_path() -> PathBuf {
    PathBuf::from("quotes.json")
}

fn default_approved_path() -> PathBuf {
    PathBuf::from("approved_quotes.json")
}

fn default_removed_path() -> PathBuf {
    PathBuf::from("removed_quotes.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            pending_path: default_pending_path(),
            approved_path: default_approved_path(),
            removed_path: default_removed_path(),
        }
    }
}

impl StorageConfig {
    /// Path of the backing file for a collection
    #[must_use]
    pub fn path_for(&self, kind: CollectionKind) -> &PathBuf {
        match kind {
            CollectionKind::Pending => &self.pending_path,
            CollectionKind::Approved => &self.approved_path,
            CollectionKind::Removed => &self.removed_path,
        }
    }
}
