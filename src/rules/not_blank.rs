//! Presence rule.
//!
//! The one rule for which null and empty strings are the failure case rather
//! than a pass-through: every other rule delegates presence checking here.

use serde_json::Value;

use crate::foundation::{Conditions, Rule, Violation};

const DEFAULT_MESSAGE: &str = "This value should not be blank";

/// Validates that a value is present and not whitespace-only.
///
/// Fails on null and on strings whose trimmed length is zero. Every other
/// value kind passes, including `0` and `false`.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::rules::not_blank;
/// use fieldcheck::foundation::Rule;
/// use serde_json::json;
///
/// let rule = not_blank();
/// assert!(rule.validate(&json!("hello")).is_ok());
/// assert!(rule.validate(&json!("   ")).is_err());
/// assert!(rule.validate(&json!(null)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotBlank {
    conditions: Conditions,
}

impl NotBlank {
    #[must_use]
    pub fn new(conditions: Conditions) -> Self {
        Self { conditions }
    }

    fn is_blank(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl Rule for NotBlank {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        if Self::is_blank(value) {
            Err(Violation::new(
                "not_blank",
                self.conditions.message_or(DEFAULT_MESSAGE),
            ))
        } else {
            Ok(())
        }
    }

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

/// Creates a `NotBlank` rule with default conditions.
#[must_use]
pub fn not_blank() -> NotBlank {
    NotBlank::default()
}
