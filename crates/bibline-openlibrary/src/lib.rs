//! bibline-openlibrary: OpenLibrary dump loader
//!
//! Transforms the OpenLibrary author and works dumps (newline-delimited,
//! tab-prefixed JSON) into keyed [`Author`](records::Author) and
//! [`Book`](records::Book) records, resolving book→author references
//! against already-loaded authors.

pub mod config;
pub mod records;
pub mod resolve;
pub mod runner;
pub mod transform;

pub use config::LoadConfig;
pub use records::{Author, Book};
pub use resolve::{UNKNOWN_AUTHOR, resolve_author_names};
pub use runner::{LoadSummary, load_authors, load_works, run};
