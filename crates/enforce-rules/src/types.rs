//! Whole-rule type phrases.
//!
//! | Phrase | Passes for |
//! |--------|------------|
//! | `a string`, `a number`, `a boolean`, `an array`, `an object`, `a function` | that kind only |
//! | `an optional <kind>` | Void or that kind |
//! | `any value` | everything |
//! | `a value` | everything but Void |

use enforce_core::{Primitive, WholeRule};

/// Kinds with a required and an optional phrase, with their article.
const KINDS: [(&str, Primitive); 6] = [
    ("a", Primitive::String),
    ("a", Primitive::Number),
    ("a", Primitive::Boolean),
    ("an", Primitive::Array),
    ("an", Primitive::Object),
    ("a", Primitive::Function),
];

/// Returns the built-in type phrases.
#[must_use]
pub fn whole_rules() -> Vec<WholeRule> {
    let mut rules = Vec::with_capacity(KINDS.len() * 2 + 2);
    for (article, kind) in KINDS {
        rules.push(WholeRule::new(
            format!("an optional {}", kind.noun()),
            move |v| Primitive::Void.test(v) || kind.test(v),
        ));
        rules.push(WholeRule::new(
            format!("{article} {}", kind.noun()),
            move |v| kind.test(v),
        ));
    }
    rules.push(WholeRule::new("any value", |_| true));
    rules.push(WholeRule::new("a value", |v| !Primitive::Void.test(v)));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use enforce_core::Value;
    use std::collections::BTreeMap;

    fn rule(phrase: &str) -> WholeRule {
        whole_rules()
            .into_iter()
            .find(|r| r.phrase() == phrase)
            .unwrap_or_else(|| panic!("missing phrase {phrase}"))
    }

    #[test]
    fn phrase_set() {
        let phrases: Vec<String> = whole_rules().iter().map(|r| r.phrase().to_string()).collect();
        insta::assert_snapshot!(phrases.join("\n"), @r"
        an optional string
        a string
        an optional number
        a number
        an optional boolean
        a boolean
        an optional array
        an array
        an optional object
        an object
        an optional function
        a function
        any value
        a value
        ");
    }

    #[test]
    fn optional_accepts_void_only_in_addition() {
        let optional = rule("an optional string");
        assert!(optional.test(&Value::Void));
        assert!(optional.test(&Value::from("x")));
        assert!(!optional.test(&Value::Null));
        assert!(!optional.test(&Value::from(1)));

        assert!(!rule("a string").test(&Value::Void));
    }

    #[test]
    fn object_and_array_are_distinct() {
        let object = Value::from(BTreeMap::from([("a".to_string(), 1)]));
        let array = Value::from(vec![1, 2]);

        assert!(rule("an object").test(&object));
        assert!(!rule("an object").test(&array));
        assert!(rule("an array").test(&array));
        assert!(!rule("an array").test(&object));
    }

    #[test]
    fn null_is_not_an_object() {
        assert!(!rule("an object").test(&Value::Null));
        assert!(!rule("an optional object").test(&Value::Null));
    }

    #[test]
    fn functions() {
        let f = Value::function("noop", |_| Value::Void);
        assert!(rule("a function").test(&f));
        assert!(!rule("an object").test(&f));
    }

    #[test]
    fn any_value_and_a_value() {
        assert!(rule("any value").test(&Value::Void));
        assert!(rule("a value").test(&Value::Null));
        assert!(!rule("a value").test(&Value::Void));
    }
}
