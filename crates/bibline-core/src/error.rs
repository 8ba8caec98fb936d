//! Per-line error type for dump processing

/// Error from transforming a single dump line.
///
/// Always handled at the line boundary: the line is logged and skipped,
/// and the scan moves on. Store failures are a separate type
/// (`bibline_store::StoreError`) and are allowed to abort the run.
#[derive(Debug)]
pub enum ParseError {
    /// No `{` anywhere on the line, so no embedded JSON payload.
    NoPayload,
    /// The payload after `{` is not valid JSON for the expected row shape.
    Json(String),
    /// The record's `key` is missing or yields no usable id once the
    /// path prefix is stripped.
    Key(String),
    /// A `created.value` timestamp was present but did not match the
    /// dump's fixed format.
    Date(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPayload => write!(f, "no JSON payload on line"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::Key(k) => write!(f, "no usable record id in key {k:?}"),
            Self::Date(v) => write!(f, "invalid timestamp {v:?} (expected YYYY-MM-DDThh:mm:ss.ffffff)"),
        }
    }
}

impl std::error::Error for ParseError {}
