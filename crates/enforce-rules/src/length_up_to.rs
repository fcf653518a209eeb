//! Rule for `with up to N characters`.
//!
//! # Configuration
//!
//! - `bound`: `"at-least"` (default) passes when `length >= N`, matching
//!   the long-standing behavior of this clause; `"at-most"` passes when
//!   `length <= N`.

use crate::length::measure;
use enforce_core::{grammar, Clause, ClauseKind, PartialRule, Value};
use regex::Regex;
use std::str::FromStr;

/// Rule code for length-up-to.
pub const CODE: &str = "EN003";

/// Rule name for length-up-to.
pub const NAME: &str = "length-up-to";

/// Comparison applied between the length and `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpToBound {
    /// `length >= N`.
    #[default]
    AtLeast,
    /// `length <= N`.
    AtMost,
}

impl UpToBound {
    /// Returns the configuration spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AtLeast => "at-least",
            Self::AtMost => "at-most",
        }
    }
}

impl FromStr for UpToBound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "at-least" => Ok(Self::AtLeast),
            "at-most" => Ok(Self::AtMost),
            other => Err(format!(
                "unknown bound `{other}`, expected: at-least, at-most"
            )),
        }
    }
}

/// Checks a length against the `N` of `with up to N characters`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthUpTo {
    /// The comparison applied.
    pub bound: UpToBound,
}

impl LengthUpTo {
    /// Creates a new rule with the default `at-least` bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comparison.
    #[must_use]
    pub fn bound(mut self, bound: UpToBound) -> Self {
        self.bound = bound;
        self
    }
}

impl PartialRule for LengthUpTo {
    fn name(&self) -> &str {
        NAME
    }

    fn code(&self) -> &str {
        CODE
    }

    fn description(&self) -> &str {
        match self.bound {
            UpToBound::AtLeast => "with up to N characters (length >= N)",
            UpToBound::AtMost => "with up to N characters (length <= N)",
        }
    }

    fn pattern(&self) -> &Regex {
        grammar::length_up_to()
    }

    fn evaluate(&self, value: &Value, clause: &Clause) -> bool {
        let ClauseKind::Bound { max: Some(n), .. } = *clause.kind() else {
            return false;
        };
        measure(value).is_some_and(|len| match self.bound {
            UpToBound::AtLeast => len >= n,
            UpToBound::AtMost => len <= n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: LengthUpTo, value: &str, clause: &str) -> bool {
        let clause = Clause::parse(clause).unwrap();
        rule.evaluate(&Value::from(value), &clause)
    }

    #[test]
    fn default_bound_requires_at_least_n() {
        let rule = LengthUpTo::new();
        assert!(check(rule, "abcdefghij", "with up to 8 characters"));
        assert!(check(rule, "abcdefgh", "with up to 8 characters"));
        assert!(!check(rule, "abc", "with up to 8 characters"));
    }

    #[test]
    fn at_most_bound_caps_length() {
        let rule = LengthUpTo::new().bound(UpToBound::AtMost);
        assert!(check(rule, "abc", "with up to 8 characters"));
        assert!(check(rule, "abcdefgh", "with up to 8 characters"));
        assert!(!check(rule, "abcdefghij", "with up to 8 characters"));
    }

    #[test]
    fn bound_parses_from_config_spelling() {
        assert_eq!("at-most".parse::<UpToBound>(), Ok(UpToBound::AtMost));
        assert_eq!(UpToBound::AtLeast.as_str().parse::<UpToBound>(), Ok(UpToBound::AtLeast));
        insta::assert_snapshot!(
            "below".parse::<UpToBound>().unwrap_err(),
            @"unknown bound `below`, expected: at-least, at-most"
        );
    }
}
