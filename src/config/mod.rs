//! Configuration loading and validation.
//!
//! Settings are read from a JSON settings document under the "rest-client"
//! key and merged with defaults. Loading is a plain function: callers own the
//! resulting [`CoreConfig`] and pass it where it is needed.

pub mod schema;

pub use schema::CoreConfig;

use log::warn;
use serde_json::Value;

/// Settings key holding the configuration object.
pub const SETTINGS_KEY: &str = "rest-client";

/// Loads configuration from a settings document.
///
/// Reads the "rest-client" object, merges it with defaults and validates the
/// result. A settings object that fails to deserialize is logged and ignored.
///
/// # Returns
///
/// `Ok(CoreConfig)` with the loaded configuration, or `Err` if validation fails.
///
/// # Example
///
/// ```
/// use rest_client_core::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "rest-client": {
///         "previewMaxLength": 40,
///         "defaultLanguage": "python"
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.preview_max_length, 40);
/// assert_eq!(config.default_language, "python");
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<CoreConfig, String> {
    let mut config = CoreConfig::default();

    if let Some(settings) = settings_json {
        if let Some(core_settings) = settings.get(SETTINGS_KEY) {
            match serde_json::from_value::<CoreConfig>(core_settings.clone()) {
                Ok(user_config) => {
                    config = config.merge(&user_config);
                }
                Err(e) => {
                    warn!(
                        "Failed to parse {} settings: {}. Using defaults.",
                        SETTINGS_KEY, e
                    );
                }
            }
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::Language;
    use serde_json::json;

    #[test]
    fn test_load_config_with_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn test_load_config_with_user_settings() {
        let settings = json!({
            "rest-client": {
                "previewMaxLength": 20,
                "defaultLanguage": "csharp"
            }
        });

        let config = load_config(Some(settings)).unwrap();
        assert_eq!(config.preview_max_length, 20);
        assert_eq!(config.language(), Language::CSharp);
    }

    #[test]
    fn test_load_config_partial_settings() {
        let settings = json!({
            "rest-client": {
                "defaultLanguage": "fetch"
            }
        });

        let config = load_config(Some(settings)).unwrap();
        assert_eq!(config.default_language, "fetch");
        assert_eq!(config.preview_max_length, 100);
    }

    #[test]
    fn test_load_config_without_key() {
        let settings = json!({ "editor": { "fontSize": 14 } });
        assert_eq!(load_config(Some(settings)).unwrap(), CoreConfig::default());
    }

    #[test]
    fn test_load_config_malformed_settings_use_defaults() {
        let settings = json!({
            "rest-client": {
                "previewMaxLength": "long"
            }
        });

        assert_eq!(load_config(Some(settings)).unwrap(), CoreConfig::default());
    }

    #[test]
    fn test_load_config_invalid_values() {
        let settings = json!({
            "rest-client": {
                "previewMaxLength": 0
            }
        });

        let err = load_config(Some(settings)).unwrap_err();
        assert!(err.starts_with("Invalid configuration"));

        let settings = json!({
            "rest-client": {
                "defaultLanguage": "cobol"
            }
        });
        assert!(load_config(Some(settings)).is_err());
    }
}
