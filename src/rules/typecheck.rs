//! Runtime kind and character-class rule.
//!
//! The `type` condition names either a scalar/structural kind
//! (`int`, `string`, `array`, ...) or an ASCII character class
//! (`digit`, `alpha`, `upper`, ...). Names in neither set silently pass,
//! which keeps unknown configuration permissive instead of failing the
//! caller.

use serde_json::Value;

use crate::foundation::{Conditions, Rule, Violation, is_empty_value, text_form};

const KIND_MESSAGE: &str = "This value should be of type {{ type }}";

/// A scalar or structural kind name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Bool,
    Int,
    Float,
    Numeric,
    String,
    Scalar,
    Array,
    Countable,
    Object,
    Null,
}

impl Kind {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::Bool => value.is_boolean(),
            Self::Int => value.is_i64() || value.is_u64(),
            Self::Float => value.is_f64(),
            Self::Numeric => {
                value.is_number()
                    || value
                        .as_str()
                        // "inf" and "NaN" parse as f64 but are not numeric strings.
                        .is_some_and(|s| s.trim().parse::<f64>().is_ok_and(f64::is_finite))
            }
            Self::String => value.is_string(),
            Self::Scalar => value.is_string() || value.is_number() || value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Countable => value.is_array() || value.is_object(),
            Self::Object => value.is_object(),
            Self::Null => value.is_null(),
        }
    }
}

/// An ASCII character class, matching the classic ctype families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Alnum,
    Alpha,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Xdigit,
}

impl CharClass {
    fn satisfies(self, c: char) -> bool {
        match self {
            Self::Alnum => c.is_ascii_alphanumeric(),
            Self::Alpha => c.is_ascii_alphabetic(),
            Self::Cntrl => c.is_ascii_control(),
            Self::Digit => c.is_ascii_digit(),
            Self::Graph => c.is_ascii_graphic(),
            Self::Lower => c.is_ascii_lowercase(),
            Self::Print => c == ' ' || c.is_ascii_graphic(),
            Self::Punct => c.is_ascii_punctuation(),
            Self::Space => c.is_ascii_whitespace(),
            Self::Upper => c.is_ascii_uppercase(),
            Self::Xdigit => c.is_ascii_hexdigit(),
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Alnum => "This value should contain only alphanumeric characters.",
            Self::Alpha => "This value should contain only alphabetic characters.",
            Self::Cntrl => "This value should contain only control characters.",
            Self::Digit => "This value should contain only digits.",
            Self::Graph => "This value should contain only printable characters excluding spaces.",
            Self::Lower => "This value should contain only lowercase letters.",
            Self::Print => "This value should contain only printable characters including spaces.",
            Self::Punct => "This value should contain only punctuation characters.",
            Self::Space => "This value should contain only whitespace characters.",
            Self::Upper => "This value should contain only uppercase letters.",
            Self::Xdigit => "This value should contain only hexadecimal digits.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Check {
    Kind(Kind),
    Class(CharClass),
    /// `type` absent or unrecognized: the rule applies no check.
    None,
}

fn parse_check(name: Option<&str>) -> Check {
    let Some(name) = name else {
        return Check::None;
    };
    match name {
        "bool" | "boolean" => Check::Kind(Kind::Bool),
        "int" | "integer" | "long" => Check::Kind(Kind::Int),
        "float" | "double" | "real" => Check::Kind(Kind::Float),
        "numeric" => Check::Kind(Kind::Numeric),
        "string" => Check::Kind(Kind::String),
        "scalar" => Check::Kind(Kind::Scalar),
        "array" | "iterable" => Check::Kind(Kind::Array),
        "countable" => Check::Kind(Kind::Countable),
        "object" => Check::Kind(Kind::Object),
        "null" => Check::Kind(Kind::Null),
        "alnum" => Check::Class(CharClass::Alnum),
        "alpha" => Check::Class(CharClass::Alpha),
        "cntrl" => Check::Class(CharClass::Cntrl),
        "digit" => Check::Class(CharClass::Digit),
        "graph" => Check::Class(CharClass::Graph),
        "lower" => Check::Class(CharClass::Lower),
        "print" => Check::Class(CharClass::Print),
        "punct" => Check::Class(CharClass::Punct),
        "space" => Check::Class(CharClass::Space),
        "upper" => Check::Class(CharClass::Upper),
        "xdigit" => Check::Class(CharClass::Xdigit),
        _ => Check::None,
    }
}

/// Validates a value's runtime kind or character class.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::{Conditions, Rule};
/// use fieldcheck::rules::type_check;
/// use serde_json::json;
///
/// let rule = type_check(Conditions::new().with("type", "digit"));
/// assert!(rule.validate(&json!("12345")).is_ok());
/// assert!(rule.validate(&json!("12a")).is_err());
///
/// let rule = type_check(Conditions::new().with("type", "int"));
/// assert!(rule.validate(&json!(5)).is_ok());
/// assert!(rule.validate(&json!("5")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Type {
    conditions: Conditions,
    check: Check,
    type_name: String,
}

impl Type {
    #[must_use]
    pub fn new(conditions: Conditions) -> Self {
        let type_name = conditions.get_str("type").unwrap_or_default().to_owned();
        let check = parse_check(conditions.get_str("type"));
        Self {
            conditions,
            check,
            type_name,
        }
    }
}

impl Rule for Type {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        if is_empty_value(value) {
            return Ok(());
        }
        match self.check {
            Check::None => Ok(()),
            Check::Kind(kind) => {
                if kind.matches(value) {
                    Ok(())
                } else {
                    Err(
                        Violation::new("type", self.conditions.message_or(KIND_MESSAGE))
                            .with_param("type", &self.type_name),
                    )
                }
            }
            Check::Class(class) => {
                let satisfied = text_form(value)
                    .is_some_and(|text| text.chars().all(|c| class.satisfies(c)));
                if satisfied {
                    Ok(())
                } else {
                    Err(
                        Violation::new("type", self.conditions.message_or(class.message()))
                            .with_param("type", &self.type_name),
                    )
                }
            }
        }
    }

    fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

/// Creates a `Type` rule from its conditions.
#[must_use]
pub fn type_check(conditions: Conditions) -> Type {
    Type::new(conditions)
}
