//! Rule for `matches /regex/flag` and `and matches /regex/flag`.
//!
//! The flag is exactly one of `i` (case-insensitive) or `g` (no effect on a
//! single test). The expression is compiled when the rule string is parsed,
//! so a broken expression is reported as a format failure instead of a
//! validation failure. Only strings can match.

use enforce_core::{grammar, Clause, ClauseKind, PartialRule, Value};
use regex::Regex;

/// Rule code for matches.
pub const CODE: &str = "EN008";

/// Rule name for matches.
pub const NAME: &str = "matches";

/// Checks a string against an inline regular expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matches;

impl Matches {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PartialRule for Matches {
    fn name(&self) -> &str {
        NAME
    }

    fn code(&self) -> &str {
        CODE
    }

    fn description(&self) -> &str {
        "[and ]matches /regex/flag"
    }

    fn pattern(&self) -> &Regex {
        grammar::matches()
    }

    fn evaluate(&self, value: &Value, clause: &Clause) -> bool {
        let ClauseKind::Pattern { regex, .. } = clause.kind() else {
            return false;
        };
        value.as_str().is_some_and(|s| regex.is_match(s))
    }
}
