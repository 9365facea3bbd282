//! Persistence adapters

pub mod quote_file_store;

pub use quote_file_store::FileQuoteStore;
