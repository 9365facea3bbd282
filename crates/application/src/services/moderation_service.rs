//! Quote moderation service
//!
//! Orchestrates the store port for the two moderation use cases: listing
//! all three collections and moving one approved entry by position into
//! either the pending-labeled file or the removed file.

use std::sync::Arc;

use domain::{CollectionKind, DomainError, MoveDestination, Quote};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::QuoteStorePort;

/// Verbatim contents of the three collections
///
/// Field names match the wire labels of the list endpoint; `quotes` is the
/// pending file.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionsSnapshot {
    pub quotes: Vec<Quote>,
    pub approved_quotes: Vec<Quote>,
    pub removed_quotes: Vec<Quote>,
}

/// Service for listing and moving quotes
pub struct ModerationService {
    store: Arc<dyn QuoteStorePort>,
}

impl std::fmt::Debug for ModerationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModerationService").finish_non_exhaustive()
    }
}

impl ModerationService {
    /// Create a new moderation service backed by the given store
    #[must_use]
    pub fn new(store: Arc<dyn QuoteStorePort>) -> Self {
        Self { store }
    }

    /// Read all three collections
    #[instrument(skip(self))]
    pub async fn list(&self) -> CollectionsSnapshot {
        CollectionsSnapshot {
            quotes: self.store.read(CollectionKind::Pending).await,
            approved_quotes: self.store.read(CollectionKind::Approved).await,
            removed_quotes: self.store.read(CollectionKind::Removed).await,
        }
    }

    /// Move the approved entry at `index` to the given destination
    ///
    /// Removes the entry from the approved file (later entries shift down by
    /// one) and appends it to the destination file. The two writes are not
    /// atomic: if the destination write fails after the source write
    /// succeeded, the entry is gone from the approved file and not yet
    /// persisted anywhere else. That window is accepted for the wall's
    /// single-operator deployment.
    #[instrument(skip(self))]
    pub async fn move_quote(
        &self,
        index: i64,
        destination: MoveDestination,
    ) -> Result<MoveDestination, ApplicationError> {
        let mut source = self.store.read(CollectionKind::Approved).await;
        let position = DomainError::check_index(index, source.len())?;

        let moving = source.remove(position);

        if let Err(e) = self.store.write(CollectionKind::Approved, &source).await {
            warn!(error = %e, "Source write failed, move aborted");
            return Err(ApplicationError::source_write());
        }

        let target = destination.target();
        let mut dest = self.store.read(target).await;
        dest.push(moving);

        if let Err(e) = self.store.write(target, &dest).await {
            warn!(error = %e, %destination, "Destination write failed after source update");
            return Err(ApplicationError::destination_write());
        }

        info!(index, %destination, "Quote moved");
        Ok(destination)
    }
}
