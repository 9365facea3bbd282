//! Domain layer for QuoteWall
//!
//! Contains the quote value type, collection naming, and domain errors.
//! This layer has no async code and performs no I/O.

pub mod collection;
pub mod errors;
pub mod quote;

pub use collection::{CollectionKind, MoveDestination};
pub use errors::DomainError;
pub use quote::Quote;
