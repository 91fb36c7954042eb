//! Length bounds rule.

use serde_json::Value;

use crate::foundation::{Conditions, Rule, Violation, is_empty_value, text_form};

const TOO_SHORT: &str = "This value is too short. It should have {{ min }} characters or more.";
const TOO_LONG: &str = "This value is too long. It should have {{ max }} characters or less.";

/// Validates character-count bounds from the `min` and `max` conditions.
///
/// The minimum is checked before the maximum, so when both bounds fail the
/// "too short" failure wins. Length is counted in characters of the value's
/// text form; values without one (booleans, arrays, objects) pass, as do
/// null and the empty string.
///
/// A missing or non-integral bound reads as "not configured": a `Length`
/// with no usable bounds accepts everything.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::{Conditions, Rule};
/// use fieldcheck::rules::length;
/// use serde_json::json;
///
/// let rule = length(Conditions::new().with("min", 3).with("max", 5));
/// assert!(rule.validate(&json!("abc")).is_ok());
/// assert!(rule.validate(&json!("ab")).is_err());
/// assert!(rule.validate(&json!("abcdef")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Length {
    conditions: Conditions,
    min: Option<usize>,
    max: Option<usize>,
}

impl Length {
    #[must_use]
    pub fn new(conditions: Conditions) -> Self {
        let min = conditions.get_usize("min");
        let max = conditions.get_usize("max");
        Self {
            conditions,
            min,
            max,
        }
    }
}

impl Rule for Length {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        if is_empty_value(value) {
            return Ok(());
        }
        let Some(text) = text_form(value) else {
            return Ok(());
        };
        let len = text.chars().count();

        if let Some(min) = self.min {
            if len < min {
                return Err(Violation::new(
                    "too_short",
                    self.conditions.message_or(TOO_SHORT),
                )
                .with_param("min", min));
            }
        }
        if let Some(max) = self.max {
            if len > max {
                return Err(Violation::new(
                    "too_long",
                    self.conditions.message_or(TOO_LONG),
                )
                .with_param("max", max));
            }
        }
        Ok(())
    }

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

/// Creates a `Length` rule from its conditions.
#[must_use]
pub fn length(conditions: Conditions) -> Length {
    Length::new(conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn min_bound() {
        let rule = length(Conditions::new().with("min", 3));
        assert!(rule.validate(&json!("abc")).is_ok());
        let err = rule.validate(&json!("ab")).unwrap_err();
        assert!(err.message.contains("too short"));
        assert_eq!(err.param("min"), Some("3"));
    }

    #[test]
    fn max_bound() {
        let rule = length(Conditions::new().with("max", 3));
        assert!(rule.validate(&json!("abc")).is_ok());
        let err = rule.validate(&json!("abcd")).unwrap_err();
        assert!(err.message.contains("too long"));
        assert_eq!(err.param("max"), Some("3"));
    }

    #[test]
    fn min_checked_before_max() {
        // min > max is misconfiguration; the short failure still wins.
        let rule = length(Conditions::new().with("min", 5).with("max", 2));
        let err = rule.validate(&json!("abc")).unwrap_err();
        assert_eq!(err.code, "too_short");
    }

    #[test]
    fn both_bounds_in_range() {
        let rule = length(Conditions::new().with("min", 1).with("max", 5));
        assert!(rule.validate(&json!("abc")).is_ok());
    }

    #[test]
    fn empty_values_pass() {
        let rule = length(Conditions::new().with("min", 3));
        assert!(rule.validate(&json!("")).is_ok());
        assert!(rule.validate(&json!(null)).is_ok());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let rule = length(Conditions::new().with("max", 5));
        assert!(rule.validate(&json!("héllo")).is_ok());
        assert!(rule.validate(&json!("日本語")).is_ok());
    }

    #[test]
    fn numbers_measured_through_text_form() {
        let rule = length(Conditions::new().with("min", 3));
        assert!(rule.validate(&json!(1234)).is_ok());
        assert!(rule.validate(&json!(12)).is_err());
    }

    #[test]
    fn no_usable_bounds_accepts_everything() {
        let rule = length(Conditions::new().with("min", "three"));
        assert!(rule.validate(&json!("x")).is_ok());
    }

    #[test]
    fn non_text_values_pass() {
        let rule = length(Conditions::new().with("min", 3));
        assert!(rule.validate(&json!([1])).is_ok());
        assert!(rule.validate(&json!(true)).is_ok());
    }
}
