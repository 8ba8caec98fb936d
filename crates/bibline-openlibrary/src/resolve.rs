//! Book→author reference resolution

use bibline_store::{RecordKind, Store, StoreError};

use crate::records::Author;

/// Sentinel display name for an author id with no record in the store.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Resolve author ids into display names via store lookups.
///
/// Returns one name per id, in the same order. A missing author is
/// expected steady state (dumps routinely reference authors outside the
/// loaded subset) and yields [`UNKNOWN_AUTHOR`]; only a store failure is
/// an error.
pub fn resolve_author_names(store: &Store, ids: &[String]) -> Result<Vec<String>, StoreError> {
    let mut names = Vec::with_capacity(ids.len());
    for id in ids {
        let name = match store.get::<Author>(RecordKind::Authors, id) {
            Ok(Some(author)) => author.name,
            Ok(None) => UNKNOWN_AUTHOR.to_string(),
            // An id that cannot even be a store key resolves like a
            // missing author: dangling references are data, not faults.
            Err(StoreError::InvalidId(bad)) => {
                log::debug!("unresolvable author id {bad:?}");
                UNKNOWN_AUTHOR.to_string()
            }
            Err(e) => return Err(e),
        };
        names.push(name);
    }
    Ok(names)
}
