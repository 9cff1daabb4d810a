//! JSON pretty-printing for request and response bodies.
//!
//! Pretty-printing uses 2-space indentation and keeps object keys in their
//! original order.

use crate::formatter::FormatError;
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Formats JSON with pretty-printing using 2-space indentation.
///
/// # Returns
///
/// `Ok(String)` with formatted JSON, or `Err(FormatError)` if the input is not
/// valid JSON.
///
/// # Examples
///
/// ```
/// use rest_client_core::formatter::json::format_json_pretty;
///
/// let json = r#"{"name":"John","age":30}"#;
/// let formatted = format_json_pretty(json).unwrap();
/// assert!(formatted.contains("  \"name\": \"John\""));
/// ```
pub fn format_json_pretty(json: &str) -> Result<String, FormatError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| FormatError::JsonError(e.to_string()))?;

    // Pre-allocate buffer with estimated capacity (formatted is ~1.5x original size)
    let mut buf = Vec::with_capacity(json.len() + (json.len() / 2));

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| FormatError::JsonError(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| FormatError::EncodingError(e.to_string()))
}

/// Pretty-prints JSON, returning the input unchanged if it does not parse.
///
/// # Examples
///
/// ```
/// use rest_client_core::formatter::prettify_json;
///
/// assert_eq!(prettify_json("not-json"), "not-json");
/// assert_eq!(prettify_json(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
/// ```
pub fn prettify_json(json: &str) -> String {
    format_json_pretty(json).unwrap_or_else(|e| {
        debug!("leaving text unformatted: {}", e);
        json.to_string()
    })
}
