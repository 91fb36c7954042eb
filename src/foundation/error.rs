//! Validation failure type.
//!
//! A [`Violation`] is the value a failing rule returns: a machine-readable
//! code, a human-readable message template, and the params available for
//! `{{ name }}` interpolation when the executor renders the template.
//!
//! Violations are plain values. Rules never cache them, so a rule's verdict
//! is a pure function of the checked value.

use std::borrow::Cow;

use smallvec::SmallVec;
use thiserror::Error;

/// A single failed check.
///
/// The `message` is a template, not a rendered string: `{{ key }}`,
/// `{{ value }}`, and any params attached here are substituted by the
/// executor. Static defaults borrow; custom messages allocate.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Violation;
///
/// let violation = Violation::new("too_short", "Need {{ min }} characters or more.")
///     .with_param("min", 3);
/// assert_eq!(violation.code, "too_short");
/// assert_eq!(violation.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct Violation {
    /// Machine-readable failure code, e.g. `"not_blank"`.
    pub code: Cow<'static, str>,

    /// Message template with optional `{{ name }}` placeholders.
    pub message: Cow<'static, str>,

    /// Interpolation params (typically 0-2 entries).
    pub params: SmallVec<[(Cow<'static, str>, String); 2]>,
}

impl Violation {
    /// Creates a violation with a code and message template.
    #[must_use]
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Attaches an interpolation param, builder style.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Looks up a param by name.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_display() {
        let violation = Violation::new("regexp", "Regular expression did not match.");
        assert_eq!(violation.code, "regexp");
        assert_eq!(
            violation.to_string(),
            "Regular expression did not match."
        );
        assert!(violation.params.is_empty());
    }

    #[test]
    fn params_are_ordered_and_queryable() {
        let violation = Violation::new("length", "between {{ min }} and {{ max }}")
            .with_param("min", 1)
            .with_param("max", 5);
        assert_eq!(violation.param("min"), Some("1"));
        assert_eq!(violation.param("max"), Some("5"));
        assert_eq!(violation.param("missing"), None);
    }

    #[test]
    fn implements_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        let violation = Violation::new("x", "y");
        takes_error(&violation);
    }
}
