//! Ordered locale fallback lookup and an owning translator component.

use crate::config::{
    ConfigError,
    TranslatorSettings,
};
use crate::helper::{
    IntlHelper,
    IntlSource,
};
use crate::key::{
    DEFAULT_KEY_SEPARATOR,
    last_segment,
};
use crate::message::MessageTree;
use crate::validation::DEFAULT_STATUS;

/// Translates `path` with the first locale in `locales` that resolves it.
///
/// Earlier locales take precedence. A miss in every locale, or no message
/// tree at all, yields the last segment of `path`.
///
/// # Examples
/// ```
/// use intl_helper::{MessageTree, translate};
/// use serde_json::json;
///
/// let tree = MessageTree::from(json!({ "en-us": { "validation": { "required": "Required" } } }));
/// let locales = vec!["fr-FR".to_string(), "en-US".to_string()];
///
/// assert_eq!(translate(&locales, Some(&tree), "validation.required", "."), "Required");
/// assert_eq!(translate(&locales, Some(&tree), "validation.someEntity.min", "."), "min");
/// ```
#[must_use]
pub fn translate(
    locales: &[String],
    messages: Option<&MessageTree>,
    path: &str,
    separator: &str,
) -> String {
    let found = messages.and_then(|tree| {
        locales.iter().find_map(|locale| {
            let message = tree.lookup(locale, path, separator);
            if message.is_none() {
                tracing::trace!("No message for '{}' in locale {}", path, locale);
            }
            message
        })
    });

    if let Some(message) = found {
        return message.to_string();
    }

    let fallback = last_segment(path, separator);
    tracing::debug!("Translation not found for '{}', falling back to '{}'", path, fallback);
    fallback.to_string()
}

/// Owned translation state from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntlState {
    /// Candidate locales in priority order.
    pub locales: Option<Vec<String>>,
    /// Messages keyed by lowercase locale.
    pub messages: Option<MessageTree>,
}

impl IntlState {
    /// Borrows this state for resolution.
    #[must_use]
    pub fn as_source(&self) -> IntlSource<'_> {
        IntlSource::new(self.locales.as_deref(), self.messages.as_ref())
    }
}

/// A standalone component that owns its explicit and inherited translation state.
///
/// # Examples
/// ```
/// use intl_helper::{IntlHelper, MessageTree, Translator};
/// use serde_json::json;
///
/// let translator = Translator::new()
///     .with_locales(["EN-US"])
///     .with_messages(MessageTree::from(json!({ "en-us": { "hello": "Hello" } })));
///
/// assert_eq!(translator.t("hello"), "Hello");
/// assert_eq!(translator.t("common.goodbye"), "goodbye");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    /// Explicitly supplied state.
    props: IntlState,
    /// Inherited state, used per field when `props` has none.
    context: IntlState,
    /// Path separator.
    key_separator: String,
    /// Status for validation results when the caller gives none.
    default_status: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            props: IntlState::default(),
            context: IntlState::default(),
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
            default_status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl Translator {
    /// Creates a translator with no state and the default separator and status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a translator from validated settings.
    ///
    /// `default_locales` becomes the inherited locale list.
    #[must_use]
    pub fn from_settings(settings: &TranslatorSettings) -> Self {
        Self {
            props: IntlState::default(),
            context: IntlState { locales: settings.default_locales.clone(), messages: None },
            key_separator: settings.key_separator.clone(),
            default_status: settings.default_status.clone(),
        }
    }

    /// Validates settings, then builds a translator from them.
    ///
    /// # Errors
    /// Returns every problem found as [`ConfigError::ValidationErrors`].
    pub fn try_from_settings(settings: &TranslatorSettings) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(Self::from_settings(settings))
    }

    /// Sets the explicit locale list.
    #[must_use]
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props.locales = Some(locales.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the explicit message tree.
    #[must_use]
    pub fn with_messages(mut self, messages: MessageTree) -> Self {
        self.props.messages = Some(messages);
        self
    }

    /// Sets the inherited locale list.
    #[must_use]
    pub fn with_context_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context.locales = Some(locales.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the inherited message tree.
    #[must_use]
    pub fn with_context_messages(mut self, messages: MessageTree) -> Self {
        self.context.messages = Some(messages);
        self
    }

    /// Explicit state.
    #[must_use]
    pub const fn props(&self) -> &IntlState {
        &self.props
    }

    /// Mutable access to the explicit state, e.g. to switch locales.
    pub fn props_mut(&mut self) -> &mut IntlState {
        &mut self.props
    }

    /// Inherited state.
    #[must_use]
    pub const fn context(&self) -> &IntlState {
        &self.context
    }

    /// Mutable access to the inherited state.
    pub fn context_mut(&mut self) -> &mut IntlState {
        &mut self.context
    }
}

impl IntlHelper for Translator {
    fn intl_props(&self) -> IntlSource<'_> {
        self.props.as_source()
    }

    fn intl_context(&self) -> IntlSource<'_> {
        self.context.as_source()
    }

    fn key_separator(&self) -> &str {
        &self.key_separator
    }

    fn default_status(&self) -> &str {
        &self.default_status
    }
}
