//! Property-based tests for fieldcheck.

use fieldcheck::prelude::*;
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn not_blank_idempotent(s in ".*") {
        let rule = not_blank();
        let value = json!(s);
        prop_assert_eq!(rule.validate(&value).is_ok(), rule.validate(&value).is_ok());
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let rule = email();
        let value = json!(s);
        prop_assert_eq!(rule.validate(&value).is_ok(), rule.validate(&value).is_ok());
    }

    #[test]
    fn length_idempotent(s in ".{0,40}") {
        let rule = length(Conditions::new().with("min", 3).with("max", 10));
        let value = json!(s);
        prop_assert_eq!(rule.validate(&value).is_ok(), rule.validate(&value).is_ok());
    }

    #[test]
    fn executor_idempotent(name in ".{0,20}", email_value in ".{0,20}") {
        let rules = RuleSet::new()
            .rule("name", not_blank())
            .rule("email", email());
        let input = input_from(json!({ "name": name, "email": email_value }));
        let executor = Executor::new();
        prop_assert_eq!(executor.validate(&input, &rules), executor.validate(&input, &rules));
    }
}

// ============================================================================
// EMPTY-VALUE POLICY: everything but NotBlank passes "" and null
// ============================================================================

proptest! {
    #[test]
    fn empty_passes_every_format_rule(min in 0usize..50, max in 0usize..50) {
        let rules: Vec<BoxedRule> = vec![
            Box::new(length(Conditions::new().with("min", min).with("max", max))),
            Box::new(email()),
            Box::new(phone_number()),
            Box::new(regexp(Conditions::new().with("regexp", "/^[0-9]+$/"))),
            Box::new(type_check(Conditions::new().with("type", "digit"))),
        ];
        for rule in &rules {
            prop_assert!(rule.validate(&json!("")).is_ok());
            prop_assert!(rule.validate(&json!(null)).is_ok());
        }
    }
}

// ============================================================================
// LENGTH: verdict agrees with character count
// ============================================================================

proptest! {
    #[test]
    fn length_verdict_matches_char_count(s in ".{1,30}", min in 1usize..20) {
        let rule = length(Conditions::new().with("min", min));
        let expected = s.chars().count() >= min;
        prop_assert_eq!(rule.validate(&json!(s)).is_ok(), expected);
    }
}

// ============================================================================
// PHONE: character-set membership decides the verdict
// ============================================================================

proptest! {
    #[test]
    fn phone_accepts_allowed_charset(s in "[0-9 ,.+-]{1,24}") {
        prop_assert!(phone_number().validate(&json!(s)).is_ok());
    }

    #[test]
    fn phone_rejects_letters(s in "[0-9 ]{0,10}[a-zA-Z][0-9 ]{0,10}") {
        prop_assert!(phone_number().validate(&json!(s)).is_err());
    }
}

// ============================================================================
// RENDERING: placeholder-free templates pass through unchanged
// ============================================================================

proptest! {
    #[test]
    fn rendering_without_braces_is_identity(s in "[^{}]{0,60}") {
        prop_assert_eq!(render_template(&s, &[("key", "k"), ("value", "v")]), s);
    }

    #[test]
    fn rendering_never_leaves_known_placeholders(v in "[a-z0-9]{0,12}") {
        let rendered = render_template("got {{ value }}", &[("value", &v)]);
        prop_assert_eq!(rendered, format!("got {v}"));
    }
}

// ============================================================================
// AT LEAST ONE OF: agrees with the disjunction of its parts
// ============================================================================

proptest! {
    #[test]
    fn at_least_one_of_is_disjunction(s in ".{1,24}") {
        let value = json!(s);
        let either = at_least_one_of(vec![Box::new(email()), Box::new(phone_number())]);
        let expected = email().validate(&value).is_ok() || phone_number().validate(&value).is_ok();
        prop_assert_eq!(either.validate(&value).is_ok(), expected);
    }
}
