//! Store error type

use std::path::PathBuf;

/// Error from a store read or write.
///
/// Unlike per-line parse failures, these are not contained: the loader has
/// no retry or recovery policy for an unusable store, so a `StoreError`
/// propagates and ends the run.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure reaching the record.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A record could not be encoded to or decoded from JSON.
    Codec {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A record id that cannot be used as a key (empty, or contains a
    /// path separator).
    InvalidId(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "IO at {}: {source}", path.display()),
            Self::Codec { path, source } => write!(f, "codec at {}: {source}", path.display()),
            Self::InvalidId(id) => write!(f, "invalid record id {id:?}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Codec { source, .. } => Some(source),
            Self::InvalidId(_) => None,
        }
    }
}
