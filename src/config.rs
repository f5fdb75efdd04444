//! Translator settings.
//!
//! Settings are plain values built in code or deserialized from JSON the host
//! already holds; this crate reads no files.

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;
use thiserror::Error;

use crate::key::DEFAULT_KEY_SEPARATOR;
use crate::validation::DEFAULT_STATUS;

/// A single invalid setting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "defaultLocales[0]")
    pub field_path: String,
    /// What is wrong and how to fix it.
    pub message: String,
}

impl ValidationError {
    /// Creates an error for the setting at `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Errors raised while building a translator from settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Every problem found by [`TranslatorSettings::validate`].
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings value does not have the expected shape.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// バリデーションエラーを番号付きリストに整形する
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Separator, default status and inherited locales for a [`crate::Translator`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorSettings {
    /// Separator between key path segments.
    pub key_separator: String,

    /// Status attached to validation messages when the caller gives none.
    pub default_status: String,

    /// Locales used when a component supplies none, in priority order.
    ///
    /// - `None`: no inherited locales; unresolved keys fall back to their last segment
    /// - `Some([...])`: tried in order after explicit locales are found missing
    pub default_locales: Option<Vec<String>>,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
            default_status: DEFAULT_STATUS.to_string(),
            default_locales: None,
        }
    }
}

impl TranslatorSettings {
    /// Reads settings from a JSON value and validates them.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    /// - The value is not an object of the expected field types
    /// - Any check in [`TranslatorSettings::validate`] fails
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_value(value)?;
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!("Settings accepted: {:?}", settings);
        Ok(settings)
    }

    /// # Errors
    /// - Separator is empty
    /// - Default status is empty
    /// - A default locale is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.default_status.is_empty() {
            errors.push(ValidationError::new(
                "defaultStatus",
                "The status cannot be empty. Example: \"error\"",
            ));
        }

        if let Some(locales) = &self.default_locales {
            for (index, locale) in locales.iter().enumerate() {
                if locale.trim().is_empty() {
                    errors.push(ValidationError::new(
                        format!("defaultLocales[{index}]"),
                        "The locale cannot be empty. Example: \"en-US\"",
                    ));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = TranslatorSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"defaultStatus": "warning"}"#;

        let settings: TranslatorSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.key_separator, eq("."));
        assert_that!(settings.default_status, eq("warning"));
        assert_that!(settings.default_locales, none());
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: TranslatorSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, TranslatorSettings::default());
    }

    #[rstest]
    fn validate_invalid_key_separator_empty() {
        let settings =
            TranslatorSettings { key_separator: String::new(), ..TranslatorSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("keySeparator")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_default_status_empty() {
        let settings =
            TranslatorSettings { default_status: String::new(), ..TranslatorSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultStatus")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_default_locale_blank() {
        let settings = TranslatorSettings {
            default_locales: Some(vec!["en-US".to_string(), "  ".to_string()]),
            ..TranslatorSettings::default()
        };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultLocales[1]")),
                field!(ValidationError.message, contains_substring("locale cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn from_value_applies_defaults() {
        let settings =
            TranslatorSettings::from_value(serde_json::json!({ "defaultLocales": ["nl"] })).unwrap();

        assert_that!(settings.key_separator, eq("."));
        assert_that!(settings.default_status, eq("error"));
        assert_eq!(settings.default_locales, Some(vec!["nl".to_string()]));
    }

    #[rstest]
    fn from_value_rejects_wrong_types() {
        let result = TranslatorSettings::from_value(serde_json::json!({ "keySeparator": 1 }));

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[rstest]
    fn from_value_rejects_invalid_settings() {
        let result = TranslatorSettings::from_value(serde_json::json!({ "defaultStatus": "" }));

        let Err(ConfigError::ValidationErrors(errors)) = result else {
            panic!("expected validation errors");
        };
        assert_that!(
            errors,
            elements_are![field!(ValidationError.field_path, eq("defaultStatus"))]
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = TranslatorSettings {
            key_separator: String::new(),
            default_status: String::new(),
            ..TranslatorSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. keySeparator"));
        assert_that!(error_message, contains_substring("2. defaultStatus"));
    }
}
