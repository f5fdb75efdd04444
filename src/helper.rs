//! Translation capability for components.
//!
//! A component exposes its translation state through [`IntlHelper::intl_props`]
//! and, optionally, inherited state through [`IntlHelper::intl_context`]. Both
//! operations resolve the two sources field by field on every call, with
//! explicit properties taking precedence over the inherited context.

use crate::key::DEFAULT_KEY_SEPARATOR;
use crate::message::MessageTree;
use crate::translator::translate;
use crate::validation::{
    DEFAULT_STATUS,
    ValidationMessages,
    ValidationResult,
    map_validation_messages,
};

/// Borrowed translation state from one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntlSource<'a> {
    /// Candidate locales in priority order.
    pub locales: Option<&'a [String]>,
    /// Messages keyed by lowercase locale.
    pub messages: Option<&'a MessageTree>,
}

impl<'a> IntlSource<'a> {
    /// Creates a source from optional locales and messages.
    #[must_use]
    pub const fn new(locales: Option<&'a [String]>, messages: Option<&'a MessageTree>) -> Self {
        Self { locales, messages }
    }
}

/// Picks the explicit value when present, otherwise the ambient one.
///
/// Presence is what counts: an explicit empty locale list still wins.
#[must_use]
pub fn resolve<T>(explicit: Option<T>, ambient: Option<T>) -> Option<T> {
    explicit.or(ambient)
}

/// Locale-aware string lookup for any component that can expose its translation state.
pub trait IntlHelper {
    /// State passed to the component directly.
    fn intl_props(&self) -> IntlSource<'_>;

    /// State inherited from the surrounding context.
    fn intl_context(&self) -> IntlSource<'_> {
        IntlSource::default()
    }

    /// Separator between path segments.
    fn key_separator(&self) -> &str {
        DEFAULT_KEY_SEPARATOR
    }

    /// Status used by [`IntlHelper::validation_messages_for_key`] when none is given.
    fn default_status(&self) -> &str {
        DEFAULT_STATUS
    }

    /// Translates a key path using the first locale that has a message for it.
    ///
    /// Falls back to the last segment of `path` when no locale resolves it.
    fn t(&self, path: &str) -> String {
        let props = self.intl_props();
        let context = self.intl_context();
        let locales = resolve(props.locales, context.locales).unwrap_or_default();
        let messages = resolve(props.messages, context.messages);

        translate(locales, messages, path, self.key_separator())
    }

    /// Translates the API error constants for `field` under `prefix`.
    ///
    /// Returns `None` when the response has no entry for `field`.
    fn validation_messages_for_key(
        &self,
        messages_by_field: &ValidationMessages,
        field: &str,
        prefix: &str,
        status: Option<&str>,
    ) -> Option<ValidationResult> {
        map_validation_messages(
            messages_by_field,
            field,
            prefix,
            status,
            self.default_status(),
            self.key_separator(),
            |path| self.t(path),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;

    /// Component holding explicit and inherited state separately.
    #[derive(Debug, Default)]
    struct Component {
        /// Explicit locales.
        locales: Option<Vec<String>>,
        /// Explicit messages.
        messages: Option<MessageTree>,
        /// Inherited locales.
        context_locales: Option<Vec<String>>,
        /// Inherited messages.
        context_messages: Option<MessageTree>,
    }

    impl IntlHelper for Component {
        fn intl_props(&self) -> IntlSource<'_> {
            IntlSource::new(self.locales.as_deref(), self.messages.as_ref())
        }

        fn intl_context(&self) -> IntlSource<'_> {
            IntlSource::new(self.context_locales.as_deref(), self.context_messages.as_ref())
        }
    }

    fn locales(codes: &[&str]) -> Option<Vec<String>> {
        Some(codes.iter().map(ToString::to_string).collect())
    }

    fn messages() -> Option<MessageTree> {
        Some(MessageTree::from(json!({
            "en-us": { "greeting": "Hello", "validation": { "user": { "email": {
                "REQUIRED": "Email is required"
            } } } },
            "ja": { "greeting": "こんにちは" }
        })))
    }

    #[rstest]
    #[case(Some(1), Some(2), Some(1))]
    #[case(None, Some(2), Some(2))]
    #[case(Some(1), None, Some(1))]
    #[case(None, None, None)]
    fn resolve_prefers_explicit(
        #[case] explicit: Option<i32>,
        #[case] ambient: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_that!(resolve(explicit, ambient), eq(expected));
    }

    #[rstest]
    fn props_override_context() {
        let component = Component {
            locales: locales(&["ja"]),
            messages: messages(),
            context_locales: locales(&["en-US"]),
            context_messages: None,
        };

        assert_that!(component.t("greeting"), eq("こんにちは"));
    }

    #[rstest]
    fn context_fills_missing_props_per_field() {
        let component = Component {
            locales: None,
            messages: messages(),
            context_locales: locales(&["en-US"]),
            context_messages: None,
        };

        assert_that!(component.t("greeting"), eq("Hello"));
    }

    #[rstest]
    fn explicit_empty_locales_win_over_context() {
        let component = Component {
            locales: Some(vec![]),
            messages: messages(),
            context_locales: locales(&["en-US"]),
            context_messages: None,
        };

        assert_that!(component.t("greeting"), eq("greeting"));
    }

    #[rstest]
    fn no_state_falls_back_to_last_segment() {
        let component = Component::default();

        assert_that!(component.t("a.b.c"), eq("c"));
    }

    #[rstest]
    fn validation_messages_use_component_translation() {
        let component = Component {
            locales: locales(&["ja", "en-US"]),
            context_messages: messages(),
            ..Component::default()
        };
        let api_errors = HashMap::from([(
            "email".to_string(),
            vec!["REQUIRED".to_string(), "TOO_LONG".to_string()],
        )]);

        let result =
            component.validation_messages_for_key(&api_errors, "email", "validation.user", None);

        assert_eq!(
            result,
            Some(ValidationResult {
                status: "error".to_string(),
                messages: vec!["Email is required".to_string(), "TOO_LONG".to_string()],
            })
        );
        assert_that!(
            component.validation_messages_for_key(&api_errors, "name", "validation.user", None),
            none()
        );
    }
}
