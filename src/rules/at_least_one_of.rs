//! Composite "at least one of" rule.

use serde_json::Value;

use crate::foundation::{BoxedRule, Conditions, Rule, Violation, is_empty_value};

const DEFAULT_MESSAGE: &str = "At least one of the conditions should be fulfilled.";

/// Validates that at least one nested rule accepts the value.
///
/// All nested rules are evaluated, with no short-circuit on the first pass;
/// the verdict is a count of passes. Nested rules and the optional `message`
/// override are held separately, so [`conditions`](Rule::conditions) exposes
/// only the message map.
///
/// An empty nested-rule list accepts everything, matching the policy that
/// missing configuration degrades to a pass.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Rule;
/// use fieldcheck::rules::{at_least_one_of, email, phone_number};
/// use serde_json::json;
///
/// let contact = at_least_one_of(vec![Box::new(email()), Box::new(phone_number())]);
/// assert!(contact.validate(&json!("a@b.com")).is_ok());
/// assert!(contact.validate(&json!("555-1234")).is_ok());
/// assert!(contact.validate(&json!("garbage!!")).is_err());
/// ```
pub struct AtLeastOneOf {
    rules: Vec<BoxedRule>,
    conditions: Conditions,
}

impl AtLeastOneOf {
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self {
            rules,
            conditions: Conditions::new(),
        }
    }

    /// Attaches a conditions map; only its `message` key is consulted.
    #[must_use]
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Sets a custom error message.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let conditions = self.conditions.with("message", message.into());
        Self { conditions, ..self }
    }

    /// Appends a nested rule, builder style.
    #[must_use]
    pub fn or(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }
}

impl Rule for AtLeastOneOf {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        if is_empty_value(value) || self.rules.is_empty() {
            return Ok(());
        }
        let passes = self
            .rules
            .iter()
            .filter(|rule| rule.validate(value).is_ok())
            .count();
        if passes > 0 {
            Ok(())
        } else {
            Err(Violation::new(
                "at_least_one_of",
                self.conditions.message_or(DEFAULT_MESSAGE),
            ))
        }
    }

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

impl std::fmt::Debug for AtLeastOneOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtLeastOneOf")
            .field("rules", &self.rules.len())
            .field("conditions", &self.conditions)
            .finish()
    }
}

/// Creates an `AtLeastOneOf` rule over the given nested rules.
#[must_use]
pub fn at_least_one_of(rules: Vec<BoxedRule>) -> AtLeastOneOf {
    AtLeastOneOf::new(rules)
}
