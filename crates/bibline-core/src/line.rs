//! Embedded-JSON extraction from catalog dump lines
//!
//! OpenLibrary dump lines carry a tab-separated prefix (record type, key,
//! revision, timestamp) before the JSON payload. Scanning for the first `{`
//! strips the prefix without depending on its exact layout.

use crate::error::ParseError;

/// Extract the JSON payload embedded in a dump line.
///
/// Returns the slice from the first `{` to the end of the line. A line
/// without any `{` has no payload and fails with [`ParseError::NoPayload`].
/// Whether the slice actually parses is the caller's concern; this only
/// locates it.
pub fn extract_json(line: &str) -> Result<&str, ParseError> {
    match line.find('{') {
        Some(start) => Ok(&line[start..]),
        None => Err(ParseError::NoPayload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tabbed_prefix() {
        let line = "/type/author\t/authors/OL1A\t3\t2008-04-01T03:28:50.625462\t{\"key\": \"/authors/OL1A\"}";
        let json = extract_json(line).unwrap();
        assert_eq!(json, "{\"key\": \"/authors/OL1A\"}");
    }

    #[test]
    fn bare_json_line_passes_through() {
        let line = "{\"name\": \"x\"}";
        assert_eq!(extract_json(line).unwrap(), line);
    }

    #[test]
    fn no_brace_is_no_payload() {
        let err = extract_json("/type/author\t/authors/OL1A\t3").unwrap_err();
        assert!(matches!(err, ParseError::NoPayload));
    }

    #[test]
    fn empty_line_is_no_payload() {
        assert!(matches!(extract_json(""), Err(ParseError::NoPayload)));
    }

    #[test]
    fn brace_inside_prefix_text_starts_payload_there() {
        // The contract is simply "first {": anything after it is the payload.
        let line = "junk {\"a\": 1}";
        assert_eq!(extract_json(line).unwrap(), "{\"a\": 1}");
    }
}
