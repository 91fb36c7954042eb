//! Rule application across an input mapping.
//!
//! [`Executor::validate`] walks a [`RuleSet`] in declared order, applies each
//! field's rule sequence to the corresponding input value, and collects one
//! rendered error per invalid field. Per-field evaluation short-circuits: the
//! first failing rule wins and later rules for that field are not run.
//!
//! Error templates are rendered by substituting `{{ name }}` placeholders
//! with the field key, the offending value's text, and any rule-specific
//! params carried by the violation. Unknown placeholders are left as-is.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};

use crate::foundation::{BoxedRule, Rule, Violation};

/// Input mapping from field name to value.
pub type Input = Map<String, Value>;

/// Output mapping from field name to rendered error message.
///
/// Only fields that failed validation appear, with at most one entry each.
pub type ErrorMap = BTreeMap<String, String>;

/// Converts a JSON value into an [`Input`] map.
///
/// Non-object values produce an empty input, for which every rule set
/// trivially passes (absent fields are never validated).
///
/// # Examples
///
/// ```rust
/// use fieldcheck::executor::input_from;
/// use serde_json::json;
///
/// let input = input_from(json!({ "name": "Alice" }));
/// assert_eq!(input.get("name"), Some(&json!("Alice")));
/// ```
#[must_use]
pub fn input_from(value: Value) -> Input {
    match value {
        Value::Object(map) => map,
        _ => Input::new(),
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered mapping from field name to a rule sequence.
///
/// Fields are iterated in the order they were first declared, and rules
/// within a field in the order they were added. Adding a single rule to a
/// field naturally forms a one-element sequence.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let rules = RuleSet::new()
///     .rule("name", not_blank())
///     .rule("name", length(Conditions::new().with("max", 64)))
///     .rule("email", email());
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Default)]
pub struct RuleSet {
    fields: Vec<(String, Vec<BoxedRule>)>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule to a field's sequence, declaring the field if needed.
    #[must_use]
    pub fn rule(self, field: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.boxed(field, Box::new(rule))
    }

    /// Appends an already-boxed rule to a field's sequence.
    #[must_use]
    pub fn boxed(mut self, field: impl Into<String>, rule: BoxedRule) -> Self {
        let field = field.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, sequence)) => sequence.push(rule),
            None => self.fields.push((field, vec![rule])),
        }
        self
    }

    /// Appends a whole rule sequence to a field.
    #[must_use]
    pub fn rules(self, field: impl Into<String>, rules: Vec<BoxedRule>) -> Self {
        let field = field.into();
        rules
            .into_iter()
            .fold(self, |set, rule| set.boxed(field.clone(), rule))
    }

    /// Iterates fields in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BoxedRule])> {
        self.fields
            .iter()
            .map(|(name, sequence)| (name.as_str(), sequence.as_slice()))
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, sequence) in &self.fields {
            map.entry(&name, &sequence.len());
        }
        map.finish()
    }
}

// ============================================================================
// EXECUTOR
// ============================================================================

/// Applies a [`RuleSet`] to an [`Input`] and collects rendered errors.
///
/// Stateless; a single executor can serve any number of validation passes,
/// concurrently. Validation never panics and never errors at this surface:
/// missing fields are skipped and malformed rule configuration has already
/// degraded to always-pass inside the rules themselves.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let rules = RuleSet::new()
///     .rule("name", not_blank())
///     .rule("email", email());
/// let input = input_from(json!({ "name": "", "email": "bad" }));
///
/// let errors = Executor::new().validate(&input, &rules);
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor;

impl Executor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validates `input` against `rules`, returning one error per failing
    /// field.
    #[must_use]
    pub fn validate(&self, input: &Input, rules: &RuleSet) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for (field, sequence) in rules.iter() {
            // Missing is not invalid; presence is NotBlank's job.
            let Some(value) = input.get(field) else {
                continue;
            };
            for rule in sequence {
                if let Err(violation) = rule.validate(value) {
                    errors.insert(field.to_owned(), render_violation(field, value, &violation));
                    break;
                }
            }
        }
        errors
    }
}

// ============================================================================
// TEMPLATE RENDERING
// ============================================================================

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Renders `{{ name }}` placeholders from a variable list.
///
/// Whitespace inside the braces is ignored. Placeholders with no matching
/// variable are left literal, not erased.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::executor::render_template;
///
/// let rendered = render_template(
///     "too short, need {{min}} chars",
///     &[("min", "5")],
/// );
/// assert_eq!(rendered, "too short, need 5 chars");
///
/// assert_eq!(render_template("{{foo}}", &[]), "{{foo}}");
/// ```
#[must_use]
pub fn render_template(template: &str, variables: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            variables
                .iter()
                .find(|(key, _)| *key == name)
                .map_or_else(|| caps[0].to_owned(), |(_, value)| (*value).to_owned())
        })
        .into_owned()
}

/// The text used for `{{ value }}`: strings verbatim, other kinds as JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_violation(field: &str, value: &Value, violation: &Violation) -> String {
    let value_text = value_text(value);
    let mut variables: Vec<(&str, &str)> = vec![("key", field), ("value", &value_text)];
    for (key, value) in &violation.params {
        variables.push((key.as_ref(), value.as_str()));
    }
    render_template(&violation.message, &variables)
}
