//! Display previews of variable resolution.

use super::substitution::{has_variables, replace_variables};
use crate::models::{Variable, VariablePreview};

/// Preview length used when the caller does not pass one.
pub const DEFAULT_PREVIEW_LENGTH: usize = 100;

const ELLIPSIS: &str = "...";

/// Builds an original/resolved pair for display.
///
/// `has_variables` reflects the original text, so a text that resolves
/// completely still reports `true`. Both strings are truncated independently
/// to `max_length` characters with `"..."` appended when cut.
///
/// # Examples
///
/// ```
/// use rest_client_core::models::Variable;
/// use rest_client_core::variables::get_variable_preview;
///
/// let variables = vec![Variable::new("name", "Alice")];
/// let preview = get_variable_preview("Hello {{ name }}!", &variables, Some(50));
/// assert_eq!(preview.resolved, "Hello Alice!");
/// assert!(preview.has_variables);
/// ```
pub fn get_variable_preview(
    text: &str,
    variables: &[Variable],
    max_length: Option<usize>,
) -> VariablePreview {
    let max_length = max_length.unwrap_or(DEFAULT_PREVIEW_LENGTH);
    let resolved = replace_variables(text, variables);

    VariablePreview {
        original: truncate(text, max_length),
        unresolved: has_variables(&resolved),
        resolved: truncate(&resolved, max_length),
        has_variables: has_variables(text),
    }
}

/// Cuts `text` to `max_length` characters and appends an ellipsis.
///
/// Lengths count Unicode scalar values so a cut never splits a character.
fn truncate(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        Some((byte_index, _)) => format!("{}{}", &text[..byte_index], ELLIPSIS),
        None => text.to_string(),
    }
}
