//! Core rule trait.
//!
//! [`Rule`] is the capability set every rule variant implements: check a
//! single value and expose the conditions the rule was configured with.
//! Verdicts are `Result<(), Violation>` so a failing check returns its error
//! template as a value, keeping rules free of mutable state.

use serde_json::Value;

use crate::foundation::{Conditions, Violation};

/// A single-value validation rule.
///
/// Rules are constructed once from a [`Conditions`] map and are reusable
/// across any number of `validate` calls. `Send + Sync` is required so rule
/// sequences can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Rule;
/// use fieldcheck::rules::not_blank;
/// use serde_json::json;
///
/// let rule = not_blank();
/// assert!(rule.validate(&json!("hello")).is_ok());
/// assert!(rule.validate(&json!("   ")).is_err());
/// ```
pub trait Rule: Send + Sync {
    /// Checks a value against this rule.
    ///
    /// A failing check returns the [`Violation`] describing the failure; the
    /// caller renders its template. Checking the same value twice yields the
    /// same verdict.
    fn validate(&self, value: &Value) -> Result<(), Violation>;

    /// The conditions this rule was configured with.
    fn conditions(&self) -> &Conditions;
}

/// A heap-allocated rule, as stored in rule sequences.
pub type BoxedRule = Box<dyn Rule>;

impl Rule for BoxedRule {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        self.as_ref().validate(value)
    }

    fn conditions(&self) -> &Conditions {
        self.as_ref().conditions()
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        (**self).validate(value)
    }

    fn conditions(&self) -> &Conditions {
        (**self).conditions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct AlwaysValid(Conditions);

    impl Rule for AlwaysValid {
        fn validate(&self, _value: &Value) -> Result<(), Violation> {
            Ok(())
        }

        fn conditions(&self) -> &Conditions {
            &self.0
        }
    }

    #[test]
    fn boxed_rule_forwards() {
        let rule: BoxedRule = Box::new(AlwaysValid(Conditions::new()));
        assert!(rule.validate(&json!("anything")).is_ok());
        assert!(rule.conditions().is_empty());
    }

    #[test]
    fn reference_forwards() {
        let rule = AlwaysValid(Conditions::new());
        let by_ref: &AlwaysValid = &rule;
        assert!(by_ref.validate(&json!(1)).is_ok());
    }
}
