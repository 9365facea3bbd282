//! Port for collection storage
//!
//! The store follows a deliberate degrade-over-fail contract inherited from
//! the wall's single-operator deployment: a read never fails (an absent or
//! unreadable file is an empty collection), and a write either fully
//! replaces the backing file or reports failure without detail. Callers must
//! check write results before reporting success to the client.

use async_trait::async_trait;
use domain::{CollectionKind, Quote};

use crate::error::ApplicationError;

/// Port for reading and overwriting the three quote collections
#[async_trait]
pub trait QuoteStorePort: Send + Sync {
    /// Read a collection in persisted order
    ///
    /// Infallible by contract: missing files, unreadable files, and corrupt
    /// JSON all degrade to an empty collection. The adapter logs the cause.
    async fn read(&self, kind: CollectionKind) -> Vec<Quote>;

    /// Replace a collection's backing file with the given entries
    ///
    /// The write is a full overwrite, never a partial update. I/O failures
    /// are logged by the adapter and surfaced only as an error value.
    async fn write(&self, kind: CollectionKind, quotes: &[Quote]) -> Result<(), ApplicationError>;
}
