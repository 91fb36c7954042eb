//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in the
//! rule trait, all built-in rules, and the executor types.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//! use serde_json::json;
//!
//! let rules = RuleSet::new()
//!     .rule("username", not_blank())
//!     .rule("username", length(Conditions::new().with("min", 3).with("max", 20)));
//!
//! let errors = Executor::new().validate(&input_from(json!({ "username": "al" })), &rules);
//! assert!(errors.contains_key("username"));
//! ```

// ============================================================================
// FOUNDATION: Core trait, conditions, violations
// ============================================================================

pub use crate::foundation::{BoxedRule, Conditions, Rule, Violation};

// ============================================================================
// RULES: All built-in rule variants and factories
// ============================================================================

pub use crate::rules::{
    AtLeastOneOf, Email, Length, NotBlank, PhoneNumber, RegExp, Type, at_least_one_of, email,
    length, not_blank, phone_number, regexp, type_check,
};

// ============================================================================
// EXECUTOR: Rule application and templating
// ============================================================================

pub use crate::executor::{ErrorMap, Executor, Input, RuleSet, input_from, render_template};
