//! Rule-string parsing into clauses.
//!
//! A rule string has the shape `"<type-clause>[, <modifier-clause>]*"`,
//! optionally prefixed with `"as "`. Each modifier is classified once into a
//! [`ClauseKind`] so evaluators read structured operands instead of slicing
//! clause text.

use regex::{Regex, RegexBuilder};
use std::fmt;

/// Placeholder token standing for a class reference in a rule string.
pub const PLACEHOLDER: &str = "{}";

/// Articles accepted in front of a class placeholder.
const ARTICLES: [&str; 2] = ["a", "an"];

/// Errors raised while parsing a rule string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An inline `matches /re/flag` clause does not compile.
    #[error("invalid regular expression in `{clause}`: {message}")]
    InvalidPattern {
        /// The offending clause text.
        clause: String,
        /// Regex compiler message.
        message: String,
    },
}

/// Comparison operators of the relational clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// `greater than N`
    Greater,
    /// `greater than or equal to N`
    GreaterOrEqual,
    /// `less than N`
    Less,
    /// `less than or equal to N`
    LessOrEqual,
}

impl ComparisonOp {
    /// Applies the operator to an ordering of `value` relative to the operand.
    #[must_use]
    pub fn holds(self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::{Equal, Greater, Less};
        match self {
            Self::Greater => ordering == Greater,
            Self::GreaterOrEqual => matches!(ordering, Greater | Equal),
            Self::Less => ordering == Less,
            Self::LessOrEqual => matches!(ordering, Less | Equal),
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
        };
        write!(f, "{symbol}")
    }
}

/// Parsed shape of a clause.
#[derive(Debug, Clone)]
pub enum ClauseKind {
    /// The leading type clause.
    Type,
    /// A character-count bound (`with N to M characters` and friends).
    Bound {
        /// Lower bound, if the clause has one.
        min: Option<u64>,
        /// Upper bound, if the clause has one.
        max: Option<u64>,
    },
    /// A relational clause (`greater than N`, ...).
    Comparison {
        /// The operator.
        op: ComparisonOp,
        /// The operand text, taken after the last space of the clause.
        operand: String,
    },
    /// An inline regular expression (`matches /re/i`).
    Pattern {
        /// The compiled expression.
        regex: Regex,
        /// The single flag character (`i` or `g`).
        flag: char,
    },
    /// Any other clause; only its text is available.
    Opaque,
}

/// One trimmed, comma-delimited segment of a rule string.
#[derive(Debug, Clone)]
pub struct Clause {
    text: String,
    kind: ClauseKind,
}

impl Clause {
    /// Parses a modifier clause.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPattern`] if an inline regex does not compile.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        Ok(Self {
            text: text.to_string(),
            kind: classify(text)?,
        })
    }

    fn type_clause(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            kind: ClauseKind::Type,
        }
    }

    /// Returns the clause text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the parsed clause kind.
    #[must_use]
    pub fn kind(&self) -> &ClauseKind {
        &self.kind
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A parsed rule string: the type clause followed by its modifiers.
#[derive(Debug, Clone)]
pub struct RuleDefinition {
    type_clause: Clause,
    modifiers: Vec<Clause>,
}

impl RuleDefinition {
    /// Parses a raw rule string.
    ///
    /// Trims the string, strips a leading `"as "`, splits on `,` and trims
    /// each clause. The first clause is the type clause.
    ///
    /// # Errors
    ///
    /// Returns an error if a modifier clause cannot be parsed.
    pub fn parse(rule: &str) -> Result<Self, ParseError> {
        let rule = rule.trim();
        let rule = rule.strip_prefix("as ").unwrap_or(rule);

        let mut parts = rule.split(',');
        let type_clause = Clause::type_clause(parts.next().unwrap_or_default());
        let modifiers = parts.map(Clause::parse).collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            type_clause,
            modifiers,
        })
    }

    /// Returns the type clause.
    #[must_use]
    pub fn type_clause(&self) -> &Clause {
        &self.type_clause
    }

    /// Returns the modifier clauses in declared order.
    #[must_use]
    pub fn modifiers(&self) -> &[Clause] {
        &self.modifiers
    }

    /// Iterates over every clause, type clause first.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        std::iter::once(&self.type_clause).chain(&self.modifiers)
    }

    /// Returns the declared rules verbatim, for error messages.
    #[must_use]
    pub fn declared(&self) -> Vec<String> {
        self.clauses().map(|c| c.text.clone()).collect()
    }

    /// Returns `true` if any clause mentions the class placeholder.
    #[must_use]
    pub fn has_placeholder(&self) -> bool {
        self.clauses()
            .any(|c| c.text.split_whitespace().any(|t| t == PLACEHOLDER))
    }

    /// Returns the article of a class-check rule (`a {}` / `an {}`).
    ///
    /// `None` unless the rule is exactly one clause of those two tokens.
    #[must_use]
    pub fn class_article(&self) -> Option<&str> {
        if !self.modifiers.is_empty() {
            return None;
        }
        let mut tokens = self.type_clause.text.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(article), Some(PLACEHOLDER), None) if ARTICLES.contains(&article) => {
                Some(article)
            }
            _ => None,
        }
    }
}

/// Compiled grammar of the built-in parametric clauses.
///
/// All patterns are case-insensitive.
pub mod grammar {
    use regex::Regex;
    use std::sync::LazyLock;

    macro_rules! pattern {
        ($(#[$doc:meta])* $name:ident, $re:literal) => {
            $(#[$doc])*
            #[must_use]
            #[allow(clippy::expect_used)] // constant pattern
            pub fn $name() -> &'static Regex {
                static RE: LazyLock<Regex> =
                    LazyLock::new(|| Regex::new($re).expect("grammar pattern is valid"));
                &RE
            }
        };
    }

    pattern!(
        /// `with N to M characters`
        length_range,
        r"(?i)^with ([0-9]+) to ([0-9]+) characters$"
    );
    pattern!(
        /// `with N or more characters`
        length_at_least,
        r"(?i)^with ([0-9]+) or more characters$"
    );
    pattern!(
        /// `with up to N characters`
        length_up_to,
        r"(?i)^with up to ([0-9]+) characters$"
    );
    pattern!(
        /// `greater than N`
        greater_than,
        r"(?i)^greater than [0-9]"
    );
    pattern!(
        /// `greater than or equal to N`
        greater_or_equal,
        r"(?i)^greater than or equal to [0-9]"
    );
    pattern!(
        /// `less than N`
        less_than,
        r"(?i)^less than [0-9]"
    );
    pattern!(
        /// `less than or equal to N`
        less_or_equal,
        r"(?i)^less than or equal to [0-9]"
    );
    pattern!(
        /// `[and ]matches /re/flag`
        matches,
        r"(?i)^(and )?matches /(.+)/([ig])$"
    );
}

fn classify(text: &str) -> Result<ClauseKind, ParseError> {
    if let Some(caps) = grammar::length_range().captures(text) {
        return Ok(ClauseKind::Bound {
            min: Some(parse_bound(&caps[1])),
            max: Some(parse_bound(&caps[2])),
        });
    }
    if let Some(caps) = grammar::length_at_least().captures(text) {
        return Ok(ClauseKind::Bound {
            min: Some(parse_bound(&caps[1])),
            max: None,
        });
    }
    if let Some(caps) = grammar::length_up_to().captures(text) {
        return Ok(ClauseKind::Bound {
            min: None,
            max: Some(parse_bound(&caps[1])),
        });
    }

    let comparisons = [
        (grammar::greater_than(), ComparisonOp::Greater),
        (grammar::greater_or_equal(), ComparisonOp::GreaterOrEqual),
        (grammar::less_than(), ComparisonOp::Less),
        (grammar::less_or_equal(), ComparisonOp::LessOrEqual),
    ];
    for (re, op) in comparisons {
        if re.is_match(text) {
            let operand = text.rsplit(' ').next().unwrap_or_default().to_string();
            return Ok(ClauseKind::Comparison { op, operand });
        }
    }

    if let Some(caps) = grammar::matches().captures(text) {
        let flag = caps[3].chars().next().unwrap_or('g').to_ascii_lowercase();
        let regex = RegexBuilder::new(&caps[2])
            .case_insensitive(flag == 'i')
            .build()
            .map_err(|e| ParseError::InvalidPattern {
                clause: text.to_string(),
                message: e.to_string(),
            })?;
        return Ok(ClauseKind::Pattern { regex, flag });
    }

    Ok(ClauseKind::Opaque)
}

/// Digit runs too long for `u64` saturate.
fn parse_bound(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
