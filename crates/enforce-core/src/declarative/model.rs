//! Pure domain model for declarative pattern rules.
//!
//! This module contains no serde and no I/O dependencies.
//! All invariants are enforced at construction time via validated newtypes.

use crate::value::Value;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::fmt;

// ────────────────────────────────────────────
// Newtypes with validation
// ────────────────────────────────────────────

/// A validated rule name (non-empty, `[a-z0-9-]` only).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleName(String);

impl RuleName {
    /// Creates a new rule name.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or contains invalid characters.
    pub fn new(name: &str) -> Result<Self, ModelError> {
        if name.is_empty() {
            return Err(ModelError::EmptyRuleName);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ModelError::InvalidRuleName {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A compiled regular expression.
///
/// The expression is compiled once at construction and reused for all
/// match calls.
#[derive(Debug, Clone)]
pub struct Pattern {
    compiled: Regex,
}

impl Pattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is empty or does not compile.
    pub fn new(pattern: &str, ignore_case: bool) -> Result<Self, ModelError> {
        if pattern.is_empty() {
            return Err(ModelError::EmptyPattern);
        }
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|e| ModelError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { compiled })
    }

    /// Returns the compiled expression.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.compiled
    }

    /// Returns the pattern as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.compiled.as_str()
    }
}

// ────────────────────────────────────────────
// Domain entities
// ────────────────────────────────────────────

/// What a pattern rule checks once its clause matched.
#[derive(Debug, Clone)]
pub enum Check {
    /// The value equals a literal.
    Equals(Value),
    /// The value equals one of several literals.
    OneOf(Vec<Value>),
    /// The value is a string matching an expression.
    Matches(Pattern),
}

impl Check {
    /// Tests `value`.
    #[must_use]
    pub fn holds(&self, value: &Value) -> bool {
        match self {
            Self::Equals(expected) => value == expected,
            Self::OneOf(candidates) => candidates.iter().any(|c| c == value),
            Self::Matches(pattern) => value.as_str().is_some_and(|s| pattern.regex().is_match(s)),
        }
    }
}

/// A declarative partial rule: a clause pattern and its check.
#[derive(Debug, Clone)]
pub struct PatternRuleDef {
    name: RuleName,
    pattern: Pattern,
    description: Option<String>,
    check: Check,
}

impl PatternRuleDef {
    /// Creates a new pattern rule definition.
    #[must_use]
    pub fn new(
        name: RuleName,
        pattern: Pattern,
        description: Option<String>,
        check: Check,
    ) -> Self {
        Self {
            name,
            pattern,
            description,
            check,
        }
    }

    /// Returns the rule name.
    #[must_use]
    pub fn name(&self) -> &RuleName {
        &self.name
    }

    /// Returns the clause pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the check.
    #[must_use]
    pub fn check(&self) -> &Check {
        &self.check
    }
}

// ────────────────────────────────────────────
// Aggregate root
// ────────────────────────────────────────────

/// Validated declarative configuration.
///
/// Names are unique; definitions keep their declared order.
#[derive(Debug, Clone, Default)]
pub struct DeclarativeConfig {
    patterns: Vec<PatternRuleDef>,
}

impl DeclarativeConfig {
    /// Creates a new declarative config with full validation.
    ///
    /// # Errors
    ///
    /// Returns one error per duplicated rule name.
    pub fn new(patterns: Vec<PatternRuleDef>) -> Result<Self, Vec<ModelError>> {
        let mut seen = HashSet::new();
        let errors: Vec<ModelError> = patterns
            .iter()
            .filter(|def| !seen.insert(def.name.clone()))
            .map(|def| ModelError::DuplicateName {
                name: def.name.clone(),
            })
            .collect();

        if errors.is_empty() {
            Ok(Self { patterns })
        } else {
            Err(errors)
        }
    }

    /// Returns true if no declarative rules are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns all pattern rules in declared order.
    #[must_use]
    pub fn patterns(&self) -> &[PatternRuleDef] {
        &self.patterns
    }
}

/// Domain model validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Rule name is empty.
    #[error("rule name must not be empty")]
    EmptyRuleName,

    /// Rule name contains invalid characters.
    #[error("invalid rule name `{name}`: must be [a-z0-9-]")]
    InvalidRuleName {
        /// The invalid name.
        name: String,
    },

    /// Pattern is empty.
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// Pattern does not compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The invalid pattern.
        pattern: String,
        /// Why it's invalid.
        reason: String,
    },

    /// Two rules share a name.
    #[error("duplicate rule name `{name}`")]
    DuplicateName {
        /// The repeated name.
        name: RuleName,
    },
}
