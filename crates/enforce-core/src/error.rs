//! Validation outcomes.
//!
//! Two kinds that are never conflated: [`ValidationFailure`] (the rule was
//! understood and the value broke it) and [`FormatFailure`] (the rule
//! itself is broken). Both carry the parameter name as structured data.

use miette::Diagnostic;

/// The value does not satisfy a well-formed rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("'{name}' must be {}", .rules.join(", "))]
#[diagnostic(code(enforce::validation))]
pub struct ValidationFailure {
    name: String,
    rules: Vec<String>,
}

impl ValidationFailure {
    /// Creates a validation failure listing every declared rule.
    #[must_use]
    pub fn new(name: impl Into<String>, rules: Vec<String>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Returns the failing parameter's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared rules, verbatim.
    #[must_use]
    pub fn rules(&self) -> &[String] {
        &self.rules
    }
}

/// Why a rule string could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatReason {
    /// The type clause matches no whole-rule phrase.
    #[error("unknown type clause `{clause}`")]
    UnknownType {
        /// The clause text.
        clause: String,
    },

    /// A modifier clause matches neither registry.
    #[error("unknown modifier clause `{clause}`")]
    UnknownModifier {
        /// The clause text.
        clause: String,
    },

    /// An inline regular expression does not compile.
    #[error("invalid regular expression in `{clause}`: {message}")]
    InvalidPattern {
        /// The clause text.
        clause: String,
        /// Regex compiler message.
        message: String,
    },

    /// A class check whose rule is not `a {}` / `an {}`.
    #[error("class check expects `a {{}}` or `an {{}}`, got `{rule}`")]
    ClassShape {
        /// The rule string as written.
        rule: String,
    },

    /// The rule names a class placeholder but no class was supplied.
    #[error("rule `{rule}` refers to a class but none was supplied")]
    MissingClassReference {
        /// The rule string as written.
        rule: String,
    },
}

impl From<crate::clause::ParseError> for FormatReason {
    fn from(err: crate::clause::ParseError) -> Self {
        match err {
            crate::clause::ParseError::InvalidPattern { clause, message } => {
                Self::InvalidPattern { clause, message }
            }
        }
    }
}

/// The rule string is malformed; a programming error at the call site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("format for parameter '{name}' is invalid: {reason}")]
#[diagnostic(
    code(enforce::format),
    help("fix the rule string at the call site; the value was not checked")
)]
pub struct FormatFailure {
    name: String,
    reason: FormatReason,
}

impl FormatFailure {
    /// Creates a format failure.
    #[must_use]
    pub fn new(name: impl Into<String>, reason: FormatReason) -> Self {
        Self {
            name: name.into(),
            reason,
        }
    }

    /// Returns the parameter whose rule is malformed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the reason.
    #[must_use]
    pub fn reason(&self) -> &FormatReason {
        &self.reason
    }
}

/// Error returned by a failed validation call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum EnforceError {
    /// The value broke the rule.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationFailure),

    /// The rule string is malformed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatFailure),
}

impl EnforceError {
    /// Returns the failing parameter's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Validation(e) => e.name(),
            Self::Format(e) => e.name(),
        }
    }

    /// Returns `true` for a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` for a format failure.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_all_rules() {
        let err = ValidationFailure::new(
            "name",
            vec![
                "an optional string".into(),
                "with 4 to 12 characters".into(),
                "and matches /^okay$/i".into(),
            ],
        );
        insta::assert_snapshot!(
            err.to_string(),
            @"'name' must be an optional string, with 4 to 12 characters, and matches /^okay$/i"
        );
    }

    #[test]
    fn format_messages() {
        let err = FormatFailure::new(
            "widget",
            FormatReason::UnknownType {
                clause: "a widget".into(),
            },
        );
        insta::assert_snapshot!(
            err.to_string(),
            @"format for parameter 'widget' is invalid: unknown type clause `a widget`"
        );

        let err = FormatFailure::new(
            "post",
            FormatReason::ClassShape {
                rule: "a string".into(),
            },
        );
        insta::assert_snapshot!(
            err.to_string(),
            @"format for parameter 'post' is invalid: class check expects `a {}` or `an {}`, got `a string`"
        );
    }

    #[test]
    fn enforce_error_exposes_kind_and_name() {
        let err = EnforceError::from(ValidationFailure::new("age", vec!["a number".into()]));
        assert!(err.is_validation());
        assert!(!err.is_format());
        assert_eq!(err.name(), "age");
        assert_eq!(err.to_string(), "'age' must be a number");

        let err = EnforceError::from(FormatFailure::new(
            "age",
            FormatReason::UnknownModifier {
                clause: "is huge".into(),
            },
        ));
        assert!(err.is_format());
        assert_eq!(err.name(), "age");
    }

    #[test]
    fn diagnostic_codes() {
        let err = EnforceError::from(ValidationFailure::new("x", vec![]));
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("enforce::validation"));

        let err = EnforceError::from(FormatFailure::new(
            "x",
            FormatReason::MissingClassReference { rule: "a {}".into() },
        ));
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("enforce::format"));
        assert!(err.help().is_some());
    }
}
