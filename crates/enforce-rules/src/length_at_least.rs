//! Rule for `with N or more characters`.

use crate::length::measure;
use enforce_core::{grammar, Clause, ClauseKind, PartialRule, Value};
use regex::Regex;

/// Rule code for length-at-least.
pub const CODE: &str = "EN002";

/// Rule name for length-at-least.
pub const NAME: &str = "length-at-least";

/// Checks that a length reaches a minimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthAtLeast;

impl LengthAtLeast {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PartialRule for LengthAtLeast {
    fn name(&self) -> &str {
        NAME
    }

    fn code(&self) -> &str {
        CODE
    }

    fn description(&self) -> &str {
        "with N or more characters"
    }

    fn pattern(&self) -> &Regex {
        grammar::length_at_least()
    }

    fn evaluate(&self, value: &Value, clause: &Clause) -> bool {
        let ClauseKind::Bound { min: Some(min), .. } = *clause.kind() else {
            return false;
        };
        measure(value).is_some_and(|len| len >= min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: impl Into<Value>, clause: &str) -> bool {
        let clause = Clause::parse(clause).unwrap();
        LengthAtLeast::new().evaluate(&value.into(), &clause)
    }

    #[test]
    fn minimum_is_inclusive() {
        assert!(check("abc", "with 3 or more characters"));
        assert!(check("abcd", "with 3 or more characters"));
        assert!(!check("ab", "with 3 or more characters"));
    }

    #[test]
    fn zero_minimum_accepts_empty() {
        assert!(check("", "with 0 or more characters"));
        assert!(check(Vec::<i32>::new(), "with 0 or more characters"));
    }

    #[test]
    fn rejects_values_without_length() {
        assert!(!check(100, "with 0 or more characters"));
    }
}
