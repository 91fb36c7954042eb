//! Rule configuration map.
//!
//! [`Conditions`] is the immutable option map supplied at rule construction.
//! Keys are rule-specific (`min`, `max`, `type`, `regexp`) plus one universal
//! optional key, `message`, overriding the rule's default error template.
//!
//! Conditions are opaque to the executor; only rules interpret them. Typed
//! accessors return `None` for missing keys and for values of the wrong kind,
//! which rules treat as "constraint not configured" rather than an error.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Immutable configuration for a single rule.
///
/// Serde-transparent over a JSON object, so rule configuration can be
/// deserialized straight from external rule declarations:
///
/// ```rust
/// use fieldcheck::foundation::Conditions;
///
/// let conditions: Conditions = serde_json::from_str(r#"{"min": 3, "max": 10}"#).unwrap();
/// assert_eq!(conditions.get_usize("min"), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conditions(Map<String, Value>);

impl Conditions {
    /// Creates an empty conditions map.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Adds an option, builder style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::foundation::Conditions;
    ///
    /// let conditions = Conditions::new().with("min", 3).with("message", "too small");
    /// assert_eq!(conditions.get_usize("min"), Some(3));
    /// ```
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw option lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// An option as a non-negative integer, if present and integral.
    #[must_use]
    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.0
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
    }

    /// An option as a string slice, if present and a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The universal custom-message override, if configured.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.get_str("message")
    }

    /// The configured message, or the rule's default template.
    #[must_use]
    pub fn message_or(&self, default: &'static str) -> Cow<'static, str> {
        match self.message() {
            Some(custom) => Cow::Owned(custom.to_owned()),
            None => Cow::Borrowed(default),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Map<String, Value>> for Conditions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Conditions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
