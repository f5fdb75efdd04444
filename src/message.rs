//! Message tree definitions

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};
use serde_json::{
    Number,
    Value,
};

use crate::key::locale_key;

/// A node in a message tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageNode {
    /// Translated string.
    Leaf(String),
    /// Nested mapping from path segment to child node.
    Node(BTreeMap<String, MessageNode>),
}

impl MessageNode {
    /// Returns the child for a single path segment.
    ///
    /// Leaves are not traversable, so they have no children.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Node(children) => children.get(segment),
            Self::Leaf(_) => None,
        }
    }

    /// Descends one segment at a time, stopping at the first missing or non-traversable step.
    #[must_use]
    pub fn descend<I>(&self, segments: I) -> Option<&Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        segments.into_iter().try_fold(self, |node, segment| node.child(segment.as_ref()))
    }

    /// Returns the string if this node is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text.as_str()),
            Self::Node(_) => None,
        }
    }
}

impl From<&str> for MessageNode {
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_string())
    }
}

impl From<String> for MessageNode {
    fn from(text: String) -> Self {
        Self::Leaf(text)
    }
}

impl FromIterator<(String, Self)> for MessageNode {
    fn from_iter<T: IntoIterator<Item = (String, Self)>>(iter: T) -> Self {
        Self::Node(iter.into_iter().collect())
    }
}

/// Zero counts as "no message", like `false` and `null`.
fn is_zero(number: &Number) -> bool {
    number.as_f64() == Some(0.0)
}

/// Converts untyped JSON into a message node.
///
/// Scalars become their JSON text and arrays are keyed by element index.
/// `null`, `false` and zero become an empty leaf, so lookups treat them as missing.
impl From<Value> for MessageNode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Leaf(text),
            Value::Null | Value::Bool(false) => Self::Leaf(String::new()),
            Value::Number(ref number) if is_zero(number) => Self::Leaf(String::new()),
            Value::Bool(true) | Value::Number(_) => Self::Leaf(value.to_string()),
            Value::Array(items) => Self::Node(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), Self::from(item)))
                    .collect(),
            ),
            Value::Object(map) => {
                Self::Node(map.into_iter().map(|(key, item)| (key, Self::from(item))).collect())
            }
        }
    }
}

impl<'de> Deserialize<'de> for MessageNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Localized messages keyed by lowercase locale identifier.
///
/// # Examples
/// ```
/// use intl_helper::MessageTree;
/// use serde_json::json;
///
/// let tree = MessageTree::from(json!({
///     "en-us": { "common": { "hello": "Hello" } }
/// }));
///
/// assert_eq!(tree.lookup("en-US", "common.hello", "."), Some("Hello"));
/// assert_eq!(tree.lookup("en-US", "common", "."), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageTree {
    /// Root node per locale.
    locales: BTreeMap<String, MessageNode>,
}

impl MessageTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { locales: BTreeMap::new() }
    }

    /// Inserts the messages for a locale, replacing any previous root.
    ///
    /// The key is stored as given; lookups fold only the requested locale.
    pub fn insert(&mut self, locale: impl Into<String>, messages: impl Into<MessageNode>) {
        self.locales.insert(locale.into(), messages.into());
    }

    /// Root node for a locale key, matched exactly.
    #[must_use]
    pub fn locale(&self, key: &str) -> Option<&MessageNode> {
        self.locales.get(key)
    }

    /// Locale keys present in the tree.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Locale keys with their root nodes, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageNode)> {
        self.locales.iter().map(|(locale, node)| (locale.as_str(), node))
    }

    /// True when no locale has messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Number of locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Looks up a path for a single locale.
    ///
    /// The locale is lowercased before matching the first tree level. Only a
    /// non-empty leaf counts as a hit; a missing segment, a leaf in the middle
    /// of the path or a path ending on a nested mapping all yield `None`.
    ///
    /// The locale is matched as one key and is never split on `separator`, so
    /// a tree key such as `"en.us"` is reachable with locale `"en.us"`.
    #[must_use]
    pub fn lookup(&self, locale: &str, path: &str, separator: &str) -> Option<&str> {
        let root = self.locales.get(&locale_key(locale))?;
        let node = if separator.is_empty() {
            root.child(path)?
        } else {
            root.descend(path.split(separator))?
        };
        node.as_leaf().filter(|text| !text.is_empty())
    }
}

impl FromIterator<(String, MessageNode)> for MessageTree {
    fn from_iter<T: IntoIterator<Item = (String, MessageNode)>>(iter: T) -> Self {
        Self { locales: iter.into_iter().collect() }
    }
}

/// Builds a tree from untyped JSON. A non-object root gives an empty tree.
impl From<Value> for MessageTree {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                map.into_iter().map(|(locale, item)| (locale, MessageNode::from(item))).collect()
            }
            _ => Self::new(),
        }
    }
}

impl<'de> Deserialize<'de> for MessageTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}
