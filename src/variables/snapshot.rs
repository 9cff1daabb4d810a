//! JSON form of a saved variable list.
//!
//! The application persists its variable list as a JSON array of
//! [`Variable`] objects. Reading is tolerant: anything that is not a valid
//! array of variables yields an empty list.

use crate::models::Variable;
use log::debug;
use serde_json::Value;

/// Serializes a variable list as a JSON array.
pub fn variables_to_json(variables: &[Variable]) -> String {
    serde_json::to_string(variables).unwrap_or_else(|e| {
        debug!("failed to serialize variables: {}", e);
        "[]".to_string()
    })
}

/// Parses a saved variable list.
///
/// Malformed JSON, a document that is not an array, or an array whose items do
/// not have the variable shape all yield an empty list.
pub fn variables_from_json(json: &str) -> Vec<Variable> {
    let value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            debug!("stored variables are not valid JSON: {}", e);
            return Vec::new();
        }
    };

    if !value.is_array() {
        debug!("stored variables are not a JSON array");
        return Vec::new();
    }

    serde_json::from_value(value).unwrap_or_else(|e| {
        debug!("stored variables have an unexpected shape: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let variables = vec![
            Variable::new("name", "Alice"),
            Variable::new("city", "Paris")
                .with_enabled(false)
                .with_description("Home town"),
        ];

        let json = variables_to_json(&variables);
        assert_eq!(variables_from_json(&json), variables);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(variables_to_json(&[]), "[]");
        assert!(variables_from_json("[]").is_empty());
    }

    #[test]
    fn test_invalid_json_yields_empty() {
        assert!(variables_from_json("INVALID JSON").is_empty());
        assert!(variables_from_json("").is_empty());
    }

    #[test]
    fn test_non_array_yields_empty() {
        assert!(variables_from_json(r#"{"foo": "bar"}"#).is_empty());
        assert!(variables_from_json("42").is_empty());
    }

    #[test]
    fn test_wrong_item_shape_yields_empty() {
        assert!(variables_from_json(r#"[{"foo": "bar"}]"#).is_empty());
    }

    #[test]
    fn test_reads_original_field_names() {
        let json = r#"[
            {"id": "1", "name": "name", "value": "Alice", "enabled": true},
            {"id": "2", "name": "city", "value": "Paris", "enabled": false}
        ]"#;

        let variables = variables_from_json(json);
        assert_eq!(variables.len(), 2);
        assert_eq!(variables[0].name, "name");
        assert!(!variables[1].enabled);
    }
}
