//! Dump line → record transformation

use bibline_core::ParseError;
use serde::{Deserialize, Deserializer};

pub mod author;
pub mod work;

pub use author::{AuthorRow, transform_author};
pub use work::{WorkRow, transform_work};

/// Catalog key path prefix for author records.
pub const AUTHOR_KEY_PREFIX: &str = "/authors/";
/// Catalog key path prefix for work records.
pub const WORK_KEY_PREFIX: &str = "/works/";

/// Strip a catalog key's path prefix to get the bare id.
///
/// Tolerant: a key without the expected prefix is used as-is rather than
/// rejected, matching the optional-field reads elsewhere.
pub fn bare_id<'a>(key: &'a str, prefix: &str) -> &'a str {
    key.strip_prefix(prefix).unwrap_or(key)
}

/// Bare id for a record's own key, validated for use as a store key.
///
/// A missing `key`, a bare prefix like `/authors/`, or leftover path
/// separators leave nothing to file the record under; that is a per-line
/// data-quality failure, contained like any other [`ParseError`].
pub fn record_id<'a>(key: &'a str, prefix: &str) -> Result<&'a str, ParseError> {
    let id = bare_id(key, prefix);
    if id.is_empty() || id.contains(['/', '\\']) {
        return Err(ParseError::Key(key.to_string()));
    }
    Ok(id)
}

/// Deserialize null as empty string (for optional String fields)
pub(crate) fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Deserialize null as empty Vec (for optional Vec fields)
pub(crate) fn null_to_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
