//! Variable data models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined variable referenced in request text as `{{name}}`.
///
/// Names are matched verbatim and case-sensitively. They need not be unique;
/// see [`crate::variables::replace_variables`] for how duplicates resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Opaque row identifier.
    pub id: String,
    /// Name used inside `{{ }}` markers.
    pub name: String,
    /// Substitution value.
    pub value: String,
    /// Free-form note shown next to the variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disabled variables never substitute.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Variable {
    /// Creates an enabled variable with a freshly generated id.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            value: value.into(),
            description: None,
            enabled: true,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether this variable takes part in substitution.
    ///
    /// An empty value counts as absent: it cannot clear a placeholder.
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.name.is_empty() && !self.value.is_empty()
    }
}

/// Original and resolved text, truncated for display.
///
/// Derived on demand by [`crate::variables::get_variable_preview`]; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablePreview {
    /// The input text, truncated.
    pub original: String,
    /// The text after substitution, truncated.
    pub resolved: String,
    /// Whether the input text contained any placeholder.
    pub has_variables: bool,
    /// Whether placeholders remain after substitution (checked before truncation).
    #[serde(skip)]
    pub(crate) unresolved: bool,
}

impl VariablePreview {
    /// Whether some placeholders could not be resolved.
    pub fn has_unresolved(&self) -> bool {
        self.unresolved
    }
}

fn default_enabled() -> bool {
    true
}
