//! Works dump line transformation
//!
//! The works dump is the irregular one: descriptions appear both as bare
//! strings and as `{"type": ..., "value": ...}` objects, and cover ids are
//! numeric. The row structs below absorb that so the rest of the loader
//! only sees [`Book`].

use bibline_core::{ParseError, extract_json};
use chrono::NaiveDateTime;
use serde::Deserialize;

use super::{
    AUTHOR_KEY_PREFIX, WORK_KEY_PREFIX, bare_id, null_to_empty, null_to_empty_vec, record_id,
};
use crate::records::Book;

/// Fixed timestamp format of `created.value` in the dump.
const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// OpenLibrary work JSON structure (the fields the loader keeps).
#[derive(Debug, Deserialize)]
pub struct WorkRow {
    #[serde(default, deserialize_with = "null_to_empty")]
    pub key: String,

    #[serde(default, deserialize_with = "null_to_empty")]
    pub title: String,

    #[serde(default)]
    pub description: Option<Text>,

    #[serde(default)]
    pub created: Option<Timestamped>,

    #[serde(default, deserialize_with = "null_to_empty_vec")]
    pub covers: Vec<CoverId>,

    #[serde(default, deserialize_with = "null_to_empty_vec")]
    pub authors: Vec<AuthorRef>,
}

/// A text field that is either a bare string or a typed
/// `{"type": "/type/text", "value": ...}` object.
#[derive(Debug)]
pub struct Text(pub String);

impl<'de> serde::Deserialize<'de> for Text {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl<'de> serde::de::Visitor<'de> for TextVisitor {
            type Value = Text;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a string or an object with a \"value\" field")
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
                Ok(Text(s.to_string()))
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut map: A,
            ) -> Result<Self::Value, A::Error> {
                let mut value = String::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "value" {
                        value = map.next_value::<String>()?;
                    } else {
                        map.next_value::<serde::de::IgnoredAny>()?;
                    }
                }
                Ok(Text(value))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

/// A typed datetime object: `{"type": "/type/datetime", "value": ...}`.
#[derive(Debug, Deserialize)]
pub struct Timestamped {
    #[serde(default, deserialize_with = "null_to_empty")]
    pub value: String,
}

/// A cover identifier, numeric in the dump but kept as a string id.
#[derive(Debug)]
pub struct CoverId(pub String);

impl<'de> serde::Deserialize<'de> for CoverId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CoverVisitor;

        impl serde::de::Visitor<'_> for CoverVisitor {
            type Value = CoverId;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a cover id as number or string")
            }

            fn visit_i64<E: serde::de::Error>(self, n: i64) -> Result<Self::Value, E> {
                Ok(CoverId(n.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, n: u64) -> Result<Self::Value, E> {
                Ok(CoverId(n.to_string()))
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
                Ok(CoverId(s.to_string()))
            }
        }

        deserializer.deserialize_any(CoverVisitor)
    }
}

/// One entry of the `authors` array: `{"author": {"key": ...}, ...}`.
///
/// `author.key` is required: an entry without it is a structural failure
/// for the whole line, unlike the tolerant optional fields above.
#[derive(Debug, Deserialize)]
pub struct AuthorRef {
    pub author: KeyRef,
}

#[derive(Debug, Deserialize)]
pub struct KeyRef {
    pub key: String,
}

/// Transform one works dump line into a [`Book`] record.
///
/// `author_names` is left empty here; the caller resolves it against the
/// author store before persisting (and only when `author_ids` is
/// non-empty). A present-but-malformed `created.value` fails the line,
/// as does an unusable `key`.
pub fn transform_work(line: &str) -> Result<Book, ParseError> {
    let json = extract_json(line)?;
    let row: WorkRow = sonic_rs::from_str(json).map_err(|e| ParseError::Json(e.to_string()))?;
    let id = record_id(&row.key, WORK_KEY_PREFIX)?.to_string();

    let published_date = match &row.created {
        Some(ts) => {
            let dt = NaiveDateTime::parse_from_str(&ts.value, CREATED_FORMAT)
                .map_err(|_| ParseError::Date(ts.value.clone()))?;
            Some(dt.date())
        }
        None => None,
    };

    let author_ids: Vec<String> = row
        .authors
        .iter()
        .map(|a| bare_id(&a.author.key, AUTHOR_KEY_PREFIX).to_string())
        .collect();

    Ok(Book {
        id,
        name: row.title,
        description: row.description.map(|t| t.0),
        published_date,
        cover_ids: row.covers.into_iter().map(|c| c.0).collect(),
        author_ids,
        author_names: Vec::new(),
    })
}
