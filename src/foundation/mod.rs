//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! engine:
//!
//! - **Traits**: `Rule`
//! - **Configuration**: `Conditions`
//! - **Errors**: `Violation`
//!
//! # Architecture
//!
//! ## 1. Pure verdicts
//!
//! A rule is a stateless predicate over a single value. A failing check
//! returns the error template as data instead of caching it on the rule, so
//! rule instances can be reused and shared across threads:
//!
//! ```rust
//! use fieldcheck::foundation::{Conditions, Rule, Violation};
//! use serde_json::Value;
//!
//! struct AlwaysFails(Conditions);
//!
//! impl Rule for AlwaysFails {
//!     fn validate(&self, _value: &Value) -> Result<(), Violation> {
//!         Err(Violation::new("always_fails", "Always fails"))
//!     }
//!
//!     fn conditions(&self) -> &Conditions {
//!         &self.0
//!     }
//! }
//! ```
//!
//! ## 2. Opaque configuration
//!
//! Rules are constructed from a [`Conditions`] map. The executor never
//! inspects conditions; only rules interpret them. Malformed configuration
//! (wrong value kinds, unknown keys) degrades to "always passes" rather than
//! failing the caller.
//!
//! ## 3. Structured failures
//!
//! A [`Violation`] carries an error code, a message template with
//! `{{ name }}` placeholders, and interpolation params:
//!
//! ```rust
//! use fieldcheck::foundation::Violation;
//!
//! let violation = Violation::new("too_short", "Need {{ min }} characters")
//!     .with_param("min", 5);
//! ```

pub mod conditions;
pub mod error;
pub mod traits;

pub use conditions::Conditions;
pub use error::Violation;
pub use traits::{BoxedRule, Rule};

/// Whether a value is treated as absent by every rule except `NotBlank`.
///
/// Null and the empty string pass all format and bound checks; checking for
/// mandatory presence is the job of the dedicated `NotBlank` rule, so
/// optional fields can carry format rules without becoming required.
#[must_use]
pub fn is_empty_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// The text form of a value, when it has one.
///
/// Strings are used as-is and numbers through their decimal rendering. Other
/// kinds (booleans, arrays, objects) have no text form for the purposes of
/// length and character-class checks.
#[must_use]
pub fn text_form(value: &serde_json::Value) -> Option<std::borrow::Cow<'_, str>> {
    match value {
        serde_json::Value::String(s) => Some(std::borrow::Cow::Borrowed(s)),
        serde_json::Value::Number(n) => Some(std::borrow::Cow::Owned(n.to_string())),
        _ => None,
    }
}
