//! User-supplied pattern rule.
//!
//! The `regexp` condition may be written bare (`^[0-9]+$`) or in the
//! delimited form external rule declarations use (`/^[0-9]+$/i`). Delimiters
//! are stripped and trailing flags translated to inline flag groups. An
//! absent, empty, or uncompilable pattern degrades to always-pass.

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Conditions, Rule, Violation, is_empty_value, text_form};

const DEFAULT_MESSAGE: &str = "Regular expression did not match.";

/// Validates a value's text form against a regular expression.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::{Conditions, Rule};
/// use fieldcheck::rules::regexp;
/// use serde_json::json;
///
/// let rule = regexp(Conditions::new().with("regexp", "/^[0-9]+$/"));
/// assert!(rule.validate(&json!("123")).is_ok());
/// assert!(rule.validate(&json!("12a")).is_err());
///
/// // No pattern configured: everything passes.
/// let rule = regexp(Conditions::new());
/// assert!(rule.validate(&json!("anything")).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RegExp {
    conditions: Conditions,
    pattern: Option<Regex>,
}

impl RegExp {
    #[must_use]
    pub fn new(conditions: Conditions) -> Self {
        let pattern = conditions
            .get_str("regexp")
            .filter(|raw| !raw.is_empty())
            .and_then(compile);
        Self {
            conditions,
            pattern,
        }
    }
}

impl Rule for RegExp {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        if is_empty_value(value) {
            return Ok(());
        }
        let Some(pattern) = &self.pattern else {
            return Ok(());
        };
        let Some(text) = text_form(value) else {
            return Ok(());
        };
        if pattern.is_match(&text) {
            Ok(())
        } else {
            Err(Violation::new(
                "regexp",
                self.conditions.message_or(DEFAULT_MESSAGE),
            ))
        }
    }

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

/// Creates a `RegExp` rule from its conditions.
#[must_use]
pub fn regexp(conditions: Conditions) -> RegExp {
    RegExp::new(conditions)
}

/// Compiles a bare or delimiter-wrapped pattern, `None` on failure.
fn compile(raw: &str) -> Option<Regex> {
    Regex::new(&undelimit(raw)).ok()
}

/// Strips `/pattern/flags`-style delimiters, translating trailing flags to an
/// inline flag group. Bare patterns are returned unchanged.
fn undelimit(raw: &str) -> String {
    let mut chars = raw.chars();
    let Some(open) = chars.next() else {
        return String::new();
    };
    // Only the unambiguous PCRE delimiters; anything else is a bare pattern.
    let close = match open {
        '/' | '#' | '~' | '!' | '%' => open,
        _ => return raw.to_owned(),
    };
    let rest = chars.as_str();
    let Some(end) = rest.rfind(close) else {
        return raw.to_owned();
    };
    let (body, flags) = rest.split_at(end);
    let flags: String = flags[close.len_utf8()..]
        .chars()
        // `u` selects Unicode mode, which the regex crate already defaults to.
        .filter(|f| matches!(f, 'i' | 'm' | 's' | 'x'))
        .collect();
    if flags.is_empty() {
        body.to_owned()
    } else {
        format!("(?{flags}){body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn delimited_pattern() {
        let rule = regexp(Conditions::new().with("regexp", "/^[0-9]+$/"));
        assert!(rule.validate(&json!("123")).is_ok());
        assert!(rule.validate(&json!("12a")).is_err());
    }

    #[test]
    fn bare_pattern() {
        let rule = regexp(Conditions::new().with("regexp", "^[0-9]+$"));
        assert!(rule.validate(&json!("123")).is_ok());
        assert!(rule.validate(&json!("12a")).is_err());
    }

    #[test]
    fn delimited_flags() {
        let rule = regexp(Conditions::new().with("regexp", "/^abc$/i"));
        assert!(rule.validate(&json!("ABC")).is_ok());
        assert!(rule.validate(&json!("abd")).is_err());
    }

    #[test]
    fn alternative_delimiters() {
        let rule = regexp(Conditions::new().with("regexp", "#^a/b$#"));
        assert!(rule.validate(&json!("a/b")).is_ok());

        let rule = regexp(Conditions::new().with("regexp", "~^x+$~"));
        assert!(rule.validate(&json!("xxx")).is_ok());
        assert!(rule.validate(&json!("xy")).is_err());
    }

    #[test]
    fn missing_or_empty_pattern_passes() {
        assert!(regexp(Conditions::new()).validate(&json!("x")).is_ok());
        let rule = regexp(Conditions::new().with("regexp", ""));
        assert!(rule.validate(&json!("x")).is_ok());
    }

    #[test]
    fn uncompilable_pattern_passes() {
        let rule = regexp(Conditions::new().with("regexp", "/([/"));
        assert!(rule.validate(&json!("anything")).is_ok());
    }

    #[test]
    fn empty_values_pass() {
        let rule = regexp(Conditions::new().with("regexp", "/^[0-9]+$/"));
        assert!(rule.validate(&json!("")).is_ok());
        assert!(rule.validate(&json!(null)).is_ok());
    }

    #[test]
    fn numbers_matched_through_text_form() {
        let rule = regexp(Conditions::new().with("regexp", "/^[0-9]+$/"));
        assert!(rule.validate(&json!(123)).is_ok());
    }

    #[test]
    fn custom_message() {
        let rule = regexp(
            Conditions::new()
                .with("regexp", "/^[0-9]+$/")
                .with("message", "{{ value }} is not numeric"),
        );
        let err = rule.validate(&json!("abc")).unwrap_err();
        assert_eq!(err.message, "{{ value }} is not numeric");
    }

    mod undelimit_behavior {
        use super::*;

        #[test]
        fn strips_matching_delimiters() {
            assert_eq!(undelimit("/^a$/"), "^a$");
            assert_eq!(undelimit("#b#"), "b");
            assert_eq!(undelimit("%c%"), "c");
        }

        #[test]
        fn translates_flags() {
            assert_eq!(undelimit("/a/i"), "(?i)a");
            assert_eq!(undelimit("/a/imu"), "(?im)a");
        }

        #[test]
        fn leaves_bare_patterns_alone() {
            assert_eq!(undelimit("^a$"), "^a$");
            assert_eq!(undelimit(r"\d+"), r"\d+");
        }
    }
}
