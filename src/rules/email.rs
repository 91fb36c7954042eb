//! Email address rule.

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{Conditions, Rule, Violation, is_empty_value, text_form};

const DEFAULT_MESSAGE: &str = "This value is not a valid email address.";

// HTML5-style address pattern. The domain must contain at least one dot, so
// bare hostnames like `user@localhost` are rejected.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

/// Validates email address syntax.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Rule;
/// use fieldcheck::rules::email;
/// use serde_json::json;
///
/// let rule = email();
/// assert!(rule.validate(&json!("a@b.com")).is_ok());
/// assert!(rule.validate(&json!("not-an-email")).is_err());
/// assert!(rule.validate(&json!("")).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Email {
    conditions: Conditions,
}

impl Email {
    #[must_use]
    pub fn new(conditions: Conditions) -> Self {
        Self { conditions }
    }
}

impl Rule for Email {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        if is_empty_value(value) {
            return Ok(());
        }
        let valid = text_form(value).is_some_and(|text| EMAIL_REGEX.is_match(&text));
        if valid {
            Ok(())
        } else {
            Err(Violation::new(
                "email",
                self.conditions.message_or(DEFAULT_MESSAGE),
            ))
        }
    }

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

/// Creates an `Email` rule with default conditions.
#[must_use]
pub fn email() -> Email {
    Email::default()
}
