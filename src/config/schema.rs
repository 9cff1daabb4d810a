//! Configuration schema for the REST client core.
//!
//! This module defines the user-configurable settings and their validation.

use crate::codegen::Language;
use crate::variables::DEFAULT_PREVIEW_LENGTH;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// All settings live under the "rest-client" key of the settings document.
/// Missing settings fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    /// Maximum number of characters shown in a variable preview before it is
    /// cut and suffixed with "...". Defaults to 100.
    ///
    /// Must be greater than 0.
    #[serde(default = "default_preview_max_length")]
    pub preview_max_length: usize,

    /// Language id used when no language is selected. Defaults to "curl".
    ///
    /// Must be one of the supported code generation languages.
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            preview_max_length: default_preview_max_length(),
            default_language: default_language(),
        }
    }
}

impl CoreConfig {
    /// Validates the configuration and returns errors if any settings are invalid.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive error message.
    pub fn validate(&self) -> Result<(), String> {
        if self.preview_max_length == 0 {
            return Err("previewMaxLength must be greater than 0".to_string());
        }

        if Language::from_id(&self.default_language).is_none() {
            return Err(format!(
                "defaultLanguage '{}' is not a supported language",
                self.default_language
            ));
        }

        Ok(())
    }

    /// Returns the default language as a [`Language`], falling back to cURL.
    pub fn language(&self) -> Language {
        Language::from_id(&self.default_language).unwrap_or(Language::Curl)
    }

    /// Merges this configuration with another, using values from `other`.
    pub fn merge(&self, other: &CoreConfig) -> Self {
        Self {
            preview_max_length: other.preview_max_length,
            default_language: other.default_language.clone(),
        }
    }
}

// Default value functions for serde

fn default_preview_max_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

fn default_language() -> String {
    Language::Curl.id().to_string()
}
