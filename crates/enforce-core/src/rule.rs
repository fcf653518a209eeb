//! Rule traits and entries.

use crate::clause::Clause;
use crate::value::Value;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// A pattern-based rule over modifier clauses.
///
/// The registry tests [`pattern`](Self::pattern) against the clause text and
/// hands the first matching rule the value together with the parsed clause.
///
/// # Example
///
/// ```ignore
/// use enforce_core::{Clause, PartialRule, Value};
/// use regex::Regex;
///
/// pub struct IsEven(Regex);
///
/// impl PartialRule for IsEven {
///     fn name(&self) -> &str { "is-even" }
///     fn pattern(&self) -> &Regex { &self.0 }
///
///     fn evaluate(&self, value: &Value, _clause: &Clause) -> bool {
///         value.as_number().is_some_and(|n| n % 2.0 == 0.0)
///     }
/// }
/// ```
pub trait PartialRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "length-range").
    fn name(&self) -> &str;

    /// Returns the rule code (e.g., "EN001"), empty for ad-hoc rules.
    fn code(&self) -> &str {
        ""
    }

    /// Returns a brief description of the clause shape this rule accepts.
    fn description(&self) -> &str {
        ""
    }

    /// Returns the pattern a clause text must match for this rule to apply.
    fn pattern(&self) -> &Regex;

    /// Checks `value` against a clause already matched by [`pattern`](Self::pattern).
    fn evaluate(&self, value: &Value, clause: &Clause) -> bool;
}

/// Shared partial-rule trait object.
pub type PartialRuleBox = Arc<dyn PartialRule>;

impl fmt::Debug for dyn PartialRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialRule")
            .field("name", &self.name())
            .field("pattern", &self.pattern().as_str())
            .finish_non_exhaustive()
    }
}

type Evaluator = dyn Fn(&Value, &Clause) -> bool + Send + Sync;

/// A partial rule built from a pattern and a closure.
pub struct FnRule {
    pattern: Regex,
    evaluator: Box<Evaluator>,
}

impl FnRule {
    /// Creates a rule from a pattern and its evaluator.
    pub fn new<F>(pattern: Regex, evaluator: F) -> Self
    where
        F: Fn(&Value, &Clause) -> bool + Send + Sync + 'static,
    {
        Self {
            pattern,
            evaluator: Box::new(evaluator),
        }
    }
}

impl PartialRule for FnRule {
    fn name(&self) -> &str {
        self.pattern.as_str()
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn evaluate(&self, value: &Value, clause: &Clause) -> bool {
        (self.evaluator)(value, clause)
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// A predicate keyed by an exact clause phrase.
#[derive(Clone)]
pub struct WholeRule {
    phrase: String,
    predicate: Arc<Predicate>,
}

impl WholeRule {
    /// Creates a whole rule for `phrase`.
    pub fn new<F>(phrase: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            phrase: phrase.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Returns the phrase this rule is keyed by.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Tests `value`.
    #[must_use]
    pub fn test(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for WholeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WholeRule")
            .field("phrase", &self.phrase)
            .finish_non_exhaustive()
    }
}
