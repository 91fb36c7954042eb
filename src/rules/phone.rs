//! Phone number rule.
//!
//! A character-set check, not a numbering-plan check: digits plus the
//! separators people actually type (spaces, commas, periods, hyphens, and a
//! plus sign). Anything stricter belongs to the caller.

use serde_json::Value;

use crate::foundation::{Conditions, Rule, Violation, is_empty_value, text_form};

const DEFAULT_MESSAGE: &str = "This value does not meet the criteria for a valid phone number.";

/// Validates that a value contains only phone-number characters.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Rule;
/// use fieldcheck::rules::phone_number;
/// use serde_json::json;
///
/// let rule = phone_number();
/// assert!(rule.validate(&json!("+1 555-123.4567")).is_ok());
/// assert!(rule.validate(&json!("call me")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhoneNumber {
    conditions: Conditions,
}

impl PhoneNumber {
    #[must_use]
    pub fn new(conditions: Conditions) -> Self {
        Self { conditions }
    }

    fn is_allowed(c: char) -> bool {
        c.is_ascii_digit() || c.is_ascii_whitespace() || matches!(c, ',' | '.' | '-' | '+')
    }
}

impl Rule for PhoneNumber {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        if is_empty_value(value) {
            return Ok(());
        }
        let valid = text_form(value).is_some_and(|text| text.chars().all(Self::is_allowed));
        if valid {
            Ok(())
        } else {
            Err(Violation::new(
                "phone_number",
                self.conditions.message_or(DEFAULT_MESSAGE),
            ))
        }
    }

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

/// Creates a `PhoneNumber` rule with default conditions.
#[must_use]
pub fn phone_number() -> PhoneNumber {
    PhoneNumber::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_common_formats() {
        let rule = phone_number();
        assert!(rule.validate(&json!("+1 555-123.4567")).is_ok());
        assert!(rule.validate(&json!("5551234567")).is_ok());
        assert!(rule.validate(&json!("555 123 4567")).is_ok());
        assert!(rule.validate(&json!("+49,30,12345")).is_ok());
    }

    #[test]
    fn rejects_other_characters() {
        let rule = phone_number();
        assert!(rule.validate(&json!("call me")).is_err());
        assert!(rule.validate(&json!("(555) 123-4567")).is_err());
        assert!(rule.validate(&json!("555#1234")).is_err());
    }

    #[test]
    fn numbers_pass_through_text_form() {
        assert!(phone_number().validate(&json!(5551234567u64)).is_ok());
    }

    #[test]
    fn empty_values_pass() {
        let rule = phone_number();
        assert!(rule.validate(&json!("")).is_ok());
        assert!(rule.validate(&json!(null)).is_ok());
    }

    #[test]
    fn default_message() {
        let err = phone_number().validate(&json!("nope")).unwrap_err();
        assert_eq!(
            err.message,
            "This value does not meet the criteria for a valid phone number."
        );
    }
}
