//! Relational rules: `greater than N`, `greater than or equal to N`,
//! `less than N` and `less than or equal to N`.
//!
//! The patterns are anchored at the start only. The operand is the text
//! after the last space of the clause. Numbers compare numerically against
//! the operand parsed as a number; strings compare lexicographically
//! against the operand text. Any other value fails.

use enforce_core::{grammar, Clause, ClauseKind, ComparisonOp, PartialRule, Value};
use regex::Regex;
use std::cmp::Ordering;

/// Rule code for greater-than.
pub const GREATER_THAN_CODE: &str = "EN004";
/// Rule name for greater-than.
pub const GREATER_THAN_NAME: &str = "greater-than";

/// Rule code for greater-or-equal.
pub const GREATER_OR_EQUAL_CODE: &str = "EN005";
/// Rule name for greater-or-equal.
pub const GREATER_OR_EQUAL_NAME: &str = "greater-or-equal";

/// Rule code for less-than.
pub const LESS_THAN_CODE: &str = "EN006";
/// Rule name for less-than.
pub const LESS_THAN_NAME: &str = "less-than";

/// Rule code for less-or-equal.
pub const LESS_OR_EQUAL_CODE: &str = "EN007";
/// Rule name for less-or-equal.
pub const LESS_OR_EQUAL_NAME: &str = "less-or-equal";

/// One relational clause shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    op: ComparisonOp,
}

impl Comparison {
    /// `greater than N`
    #[must_use]
    pub fn greater_than() -> Self {
        Self {
            op: ComparisonOp::Greater,
        }
    }

    /// `greater than or equal to N`
    #[must_use]
    pub fn greater_or_equal() -> Self {
        Self {
            op: ComparisonOp::GreaterOrEqual,
        }
    }

    /// `less than N`
    #[must_use]
    pub fn less_than() -> Self {
        Self {
            op: ComparisonOp::Less,
        }
    }

    /// `less than or equal to N`
    #[must_use]
    pub fn less_or_equal() -> Self {
        Self {
            op: ComparisonOp::LessOrEqual,
        }
    }

    /// Returns the operator.
    #[must_use]
    pub fn op(&self) -> ComparisonOp {
        self.op
    }
}

impl PartialRule for Comparison {
    fn name(&self) -> &str {
        match self.op {
            ComparisonOp::Greater => GREATER_THAN_NAME,
            ComparisonOp::GreaterOrEqual => GREATER_OR_EQUAL_NAME,
            ComparisonOp::Less => LESS_THAN_NAME,
            ComparisonOp::LessOrEqual => LESS_OR_EQUAL_NAME,
        }
    }

    fn code(&self) -> &str {
        match self.op {
            ComparisonOp::Greater => GREATER_THAN_CODE,
            ComparisonOp::GreaterOrEqual => GREATER_OR_EQUAL_CODE,
            ComparisonOp::Less => LESS_THAN_CODE,
            ComparisonOp::LessOrEqual => LESS_OR_EQUAL_CODE,
        }
    }

    fn description(&self) -> &str {
        match self.op {
            ComparisonOp::Greater => "greater than N",
            ComparisonOp::GreaterOrEqual => "greater than or equal to N",
            ComparisonOp::Less => "less than N",
            ComparisonOp::LessOrEqual => "less than or equal to N",
        }
    }

    fn pattern(&self) -> &Regex {
        match self.op {
            ComparisonOp::Greater => grammar::greater_than(),
            ComparisonOp::GreaterOrEqual => grammar::greater_or_equal(),
            ComparisonOp::Less => grammar::less_than(),
            ComparisonOp::LessOrEqual => grammar::less_or_equal(),
        }
    }

    fn evaluate(&self, value: &Value, clause: &Clause) -> bool {
        let ClauseKind::Comparison { operand, .. } = clause.kind() else {
            return false;
        };
        compare(value, operand).is_some_and(|ordering| self.op.holds(ordering))
    }
}

/// Orders `value` relative to `operand`; `None` if they are not comparable.
///
/// Numbers only compare against finite operands, so `inf` and `nan` fail.
fn compare(value: &Value, operand: &str) -> Option<Ordering> {
    match value {
        Value::Number(n) => {
            let operand = operand.parse::<f64>().ok().filter(|o| o.is_finite())?;
            n.partial_cmp(&operand)
        }
        Value::String(s) => Some(s.as_str().cmp(operand)),
        _ => None,
    }
}
