//! bibline-store: Keyed record store for catalog records
//!
//! One JSON document per record, keyed by catalog id, grouped by record
//! kind. Writes are upserts (last writer wins per key); reads return
//! `None` for absent ids. This is the authoritative shared state between
//! the author and book load phases.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{RecordKind, Store};
