//! Persisted record shapes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An author record, keyed by its catalog id.
///
/// Written once per dump line; re-running the loader overwrites by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub id: String,
    pub name: String,
    /// Empty when the dump line has no `personal_name`.
    #[serde(default)]
    pub personal_name: String,
}

/// A book record, keyed by its catalog id.
///
/// `author_names[i]` is the resolved display name for `author_ids[i]`;
/// the two sequences always have equal length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub cover_ids: Vec<String>,
    #[serde(default)]
    pub author_ids: Vec<String>,
    #[serde(default)]
    pub author_names: Vec<String>,
}
