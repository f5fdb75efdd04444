//! Mapping of API validation error constants to localized messages.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::key::join_key;

/// Status used when the caller does not pass one.
pub const DEFAULT_STATUS: &str = "error";

/// Validation error constants returned by an API, keyed by field name.
pub type ValidationMessages = HashMap<String, Vec<String>>;

/// Localized messages for a single field, tagged with a status for styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Styling tag, `"error"` unless the caller chose another.
    pub status: String,
    /// One translated message per API constant, in input order.
    pub messages: Vec<String>,
}

/// Maps the constants for `field` to translated messages.
///
/// Each constant is translated as `prefix{sep}field{sep}constant`, keeping the
/// input order. Returns `None` when `field` has no entry. A `status` of `None`
/// or `""` selects `default_status`.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn map_validation_messages<F>(
    messages_by_field: &HashMap<String, Vec<String>>,
    field: &str,
    prefix: &str,
    status: Option<&str>,
    default_status: &str,
    separator: &str,
    translate: F,
) -> Option<ValidationResult>
where
    F: Fn(&str) -> String,
{
    let constants = messages_by_field.get(field)?;
    let status = status.filter(|s| !s.is_empty()).unwrap_or(default_status);

    let messages = constants
        .iter()
        .map(|constant| translate(&join_key(&[prefix, field, constant.as_str()], separator)))
        .collect();

    Some(ValidationResult { status: status.to_string(), messages })
}
