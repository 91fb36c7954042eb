//! # fieldcheck
//!
//! A field-level input validation engine: apply ordered rule sequences to a
//! mapping of field values and collect one rendered error message per
//! invalid field.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//! use serde_json::json;
//!
//! let rules = RuleSet::new()
//!     .rule("name", not_blank())
//!     .rule("email", email());
//!
//! let input = input_from(json!({ "name": "", "email": "bad" }));
//!
//! let errors = Executor::new().validate(&input, &rules);
//! assert_eq!(errors["name"], "This value should not be blank");
//! assert_eq!(errors["email"], "This value is not a valid email address.");
//! ```
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`NotBlank`](rules::NotBlank)
//! - **Bounds**: [`Length`](rules::Length)
//! - **Kind and character class**: [`Type`](rules::Type)
//! - **Patterns**: [`RegExp`](rules::RegExp), [`Email`](rules::Email),
//!   [`PhoneNumber`](rules::PhoneNumber)
//! - **Composite**: [`AtLeastOneOf`](rules::AtLeastOneOf)
//!
//! Every rule accepts a `message` condition that overrides its default error
//! template. Templates may interpolate `{{ key }}`, `{{ value }}`, and
//! rule-specific bounds such as `{{ min }}`.

// Violation is the fundamental error type returned on every failed check —
// boxing it would add indirection to every rule evaluation for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod executor;
pub mod foundation;
pub mod prelude;
pub mod rules;

pub use executor::{ErrorMap, Executor, Input, RuleSet, input_from};
pub use foundation::{BoxedRule, Conditions, Rule, Violation};
