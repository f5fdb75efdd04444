//! intl-helper
//!
//! Locale-aware message lookup over nested translation trees. A key path is
//! resolved against an ordered list of candidate locales; the first locale
//! with a non-empty message wins, and unresolved keys fall back to their last
//! path segment.

pub mod config;
pub mod helper;
pub mod key;
pub mod message;
pub mod translator;
pub mod validation;

pub use config::{
    ConfigError,
    TranslatorSettings,
    ValidationError,
};
pub use helper::{
    IntlHelper,
    IntlSource,
    resolve,
};
pub use message::{
    MessageNode,
    MessageTree,
};
pub use translator::{
    IntlState,
    Translator,
    translate,
};
pub use validation::{
    DEFAULT_STATUS,
    ValidationMessages,
    ValidationResult,
};
