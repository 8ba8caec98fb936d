//! Bibline Core - Common infrastructure for catalog dump loading
//!
//! This crate provides the pieces shared by the dump loaders: embedded-JSON
//! line extraction, the per-line error type, logging setup, and progress
//! reporting.

pub mod error;
pub mod line;
pub mod logging;
pub mod progress;

// Re-exports for convenience
pub use error::ParseError;
pub use line::extract_json;
pub use logging::{IndicatifLogger, init_logging};
pub use progress::{ProgressContext, SharedProgress};
