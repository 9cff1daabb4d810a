//! Text formatting for request and response bodies.

pub mod json;

pub use json::{format_json_pretty, prettify_json};

use std::fmt;

/// Errors that can occur during formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// JSON parsing or formatting error.
    JsonError(String),

    /// UTF-8 encoding error.
    EncodingError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::JsonError(msg) => write!(f, "JSON formatting error: {}", msg),
            FormatError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = FormatError::JsonError("expected value".to_string());
        assert_eq!(err.to_string(), "JSON formatting error: expected value");
    }
}
