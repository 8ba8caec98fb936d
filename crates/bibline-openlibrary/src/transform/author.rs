//! Author dump line transformation

use bibline_core::{ParseError, extract_json};
use serde::Deserialize;

use super::{AUTHOR_KEY_PREFIX, null_to_empty, record_id};
use crate::records::Author;

/// OpenLibrary author JSON structure (the fields the loader keeps).
#[derive(Debug, Deserialize)]
pub struct AuthorRow {
    #[serde(default, deserialize_with = "null_to_empty")]
    pub key: String,

    #[serde(default, deserialize_with = "null_to_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_to_empty")]
    pub personal_name: String,
}

/// Transform one author dump line into an [`Author`] record.
///
/// Missing `name`/`personal_name` become empty strings, never an error;
/// a missing payload, structurally invalid JSON, or an unusable `key`
/// fails the line.
pub fn transform_author(line: &str) -> Result<Author, ParseError> {
    let json = extract_json(line)?;
    let row: AuthorRow =
        sonic_rs::from_str(json).map_err(|e| ParseError::Json(e.to_string()))?;

    Ok(Author {
        id: record_id(&row.key, AUTHOR_KEY_PREFIX)?.to_string(),
        name: row.name,
        personal_name: row.personal_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_AUTHOR: &str = "/type/author\t/authors/OL123A\t2\t2008-08-20T17:57:09.66187\t{\"key\": \"/authors/OL123A\", \"name\": \"Jane Doe\", \"personal_name\": \"Jane Doe\", \"last_modified\": {\"type\": \"/type/datetime\", \"value\": \"2008-08-20T17:57:09.66187\"}}";

    #[test]
    fn maps_fields_and_strips_prefix() {
        let author = transform_author(SAMPLE_AUTHOR).unwrap();
        assert_eq!(author.id, "OL123A");
        assert_eq!(author.name, "Jane Doe");
        assert_eq!(author.personal_name, "Jane Doe");
    }

    #[test]
    fn missing_optional_fields_become_empty() {
        let author = transform_author("{\"key\": \"/authors/OL9A\"}").unwrap();
        assert_eq!(author.id, "OL9A");
        assert_eq!(author.name, "");
        assert_eq!(author.personal_name, "");
    }

    #[test]
    fn null_name_becomes_empty() {
        let author =
            transform_author("{\"key\": \"/authors/OL9A\", \"name\": null}").unwrap();
        assert_eq!(author.name, "");
    }

    #[test]
    fn keyless_author_fails_line() {
        let err = transform_author("{\"name\": \"No Key Here\"}").unwrap_err();
        assert!(matches!(err, ParseError::Key(_)));
    }

    #[test]
    fn bare_prefix_key_fails_line() {
        let err =
            transform_author("{\"key\": \"/authors/\", \"name\": \"X\"}").unwrap_err();
        assert!(matches!(err, ParseError::Key(_)));
    }

    #[test]
    fn line_without_payload_fails() {
        let err = transform_author("/type/author\t/authors/OL9A\t1").unwrap_err();
        assert!(matches!(err, ParseError::NoPayload));
    }

    #[test]
    fn truncated_json_fails() {
        let err = transform_author("{\"key\": \"/authors/OL9A\"").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn extra_fields_ignored() {
        let author = transform_author(
            "{\"key\": \"/authors/OL9A\", \"name\": \"X\", \"birth_date\": \"1900\", \"photos\": [1, 2]}",
        )
        .unwrap();
        assert_eq!(author.id, "OL9A");
        assert_eq!(author.name, "X");
    }
}
