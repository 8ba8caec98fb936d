//! Filesystem-backed keyed store
//!
//! Directory layout:
//! ```text
//! {base}/
//! ├── authors/
//! │   └── {id}.json
//! └── books/
//!     └── {id}.json
//! ```
//!
//! `put` stages the document in a `.tmp` file and renames it into place, so
//! a record is either the old version or the new one, never a torn write.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Record kinds the store holds, one directory each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Authors,
    Books,
}

impl RecordKind {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Authors => "authors",
            Self::Books => "books",
        }
    }
}

/// Keyed record store rooted at a base directory.
pub struct Store {
    base: PathBuf,
}

impl Store {
    /// Open (or create) a store rooted at `base`.
    pub fn open(base: &Path) -> Result<Self, StoreError> {
        for kind in [RecordKind::Authors, RecordKind::Books] {
            let dir = base.join(kind.dir_name());
            fs::create_dir_all(&dir).map_err(|source| StoreError::Io { path: dir, source })?;
        }
        Ok(Self {
            base: base.to_path_buf(),
        })
    }

    fn kind_dir(&self, kind: RecordKind) -> PathBuf {
        self.base.join(kind.dir_name())
    }

    fn record_path(&self, kind: RecordKind, id: &str) -> Result<PathBuf, StoreError> {
        if id.is_empty() || id.contains(['/', '\\']) {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.kind_dir(kind).join(format!("{id}.json")))
    }

    /// Upsert a record under `id`. Overwrites any prior record with the
    /// same id.
    pub fn put<T: Serialize>(
        &self,
        kind: RecordKind,
        id: &str,
        record: &T,
    ) -> Result<(), StoreError> {
        let path = self.record_path(kind, id)?;
        let json = serde_json::to_vec(record).map_err(|source| StoreError::Codec {
            path: path.clone(),
            source,
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })
    }

    /// Fetch a record by id, `None` when no record with that id exists.
    pub fn get<T: DeserializeOwned>(
        &self,
        kind: RecordKind,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        let path = self.record_path(kind, id)?;
        let json = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let record =
            serde_json::from_slice(&json).map_err(|source| StoreError::Codec { path, source })?;
        Ok(Some(record))
    }

    /// Number of records of a kind. Stale `.tmp` files are not counted.
    pub fn count(&self, kind: RecordKind) -> Result<usize, StoreError> {
        Ok(self.ids(kind)?.len())
    }

    /// All record ids of a kind, sorted.
    pub fn ids(&self, kind: RecordKind) -> Result<Vec<String>, StoreError> {
        let dir = self.kind_dir(kind);
        let entries = fs::read_dir(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(id) = name.strip_suffix(".json") {
                ids.push(id.to_string());
            } else if name.ends_with(".json.tmp") {
                log::debug!("skipping stale tmp file: {name}");
            }
        }
        ids.sort();
        Ok(ids)
    }
}
