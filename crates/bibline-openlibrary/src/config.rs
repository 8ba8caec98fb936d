//! Loader configuration

use std::path::PathBuf;

/// Runtime configuration for one loader run.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Path to the author dump file.
    pub authors_dump: PathBuf,
    /// Path to the works dump file.
    pub works_dump: PathBuf,
    /// Maximum author dump lines to process. `None` = whole file.
    pub max_authors: Option<usize>,
    /// Maximum works dump lines to process. `None` = whole file.
    pub max_books: Option<usize>,
}

impl LoadConfig {
    pub fn new(authors_dump: impl Into<PathBuf>, works_dump: impl Into<PathBuf>) -> Self {
        Self {
            authors_dump: authors_dump.into(),
            works_dump: works_dump.into(),
            max_authors: None,
            max_books: None,
        }
    }
}
