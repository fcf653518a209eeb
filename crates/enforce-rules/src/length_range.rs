//! Rule for `with N to M characters`.
//!
//! Passes when `N <= length <= M`. Length is the character count of a
//! string or the element count of an array; other values fail.

use crate::length::measure;
use enforce_core::{grammar, Clause, ClauseKind, PartialRule, Value};
use regex::Regex;

/// Rule code for length-range.
pub const CODE: &str = "EN001";

/// Rule name for length-range.
pub const NAME: &str = "length-range";

/// Checks that a length lies within an inclusive range.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthRange;

impl LengthRange {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PartialRule for LengthRange {
    fn name(&self) -> &str {
        NAME
    }

    fn code(&self) -> &str {
        CODE
    }

    fn description(&self) -> &str {
        "with N to M characters"
    }

    fn pattern(&self) -> &Regex {
        grammar::length_range()
    }

    fn evaluate(&self, value: &Value, clause: &Clause) -> bool {
        let ClauseKind::Bound {
            min: Some(min),
            max: Some(max),
        } = *clause.kind()
        else {
            return false;
        };
        measure(value).is_some_and(|len| (min..=max).contains(&len))
    }
}
