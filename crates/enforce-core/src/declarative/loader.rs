//! DTO → Domain model conversion with validation.

use crate::value::Value;

use super::config_dto::{DeclarativeConfigDto, PatternDto};
use super::model::{Check, DeclarativeConfig, ModelError, Pattern, PatternRuleDef, RuleName};

/// Errors during DTO → Domain conversion.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A field-level validation error.
    #[error("{context}: {source}")]
    Validation {
        /// Where the error occurred (e.g., "patterns[0].pattern").
        context: String,
        /// The underlying model error.
        source: ModelError,
    },

    /// Zero or several of `equals`, `one-of` and `matches` are set.
    #[error("{context}: exactly one of `equals`, `one-of` or `matches` must be set")]
    AmbiguousCheck {
        /// The offending entry (e.g., "patterns[1]").
        context: String,
    },

    /// Cross-entry errors from aggregate root construction.
    #[error("configuration validation errors:\n{}", format_errors(.0))]
    CrossRef(Vec<ModelError>),
}

fn format_errors(errors: &[ModelError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts a `DeclarativeConfigDto` to a validated `DeclarativeConfig`.
///
/// # Errors
///
/// Returns the first error encountered during conversion.
pub fn load(dto: DeclarativeConfigDto) -> Result<DeclarativeConfig, LoadError> {
    let patterns = dto
        .patterns
        .into_iter()
        .enumerate()
        .map(|(i, p)| convert_pattern(p, i))
        .collect::<Result<Vec<_>, _>>()?;

    DeclarativeConfig::new(patterns).map_err(LoadError::CrossRef)
}

fn convert_pattern(dto: PatternDto, index: usize) -> Result<PatternRuleDef, LoadError> {
    let ctx = format!("patterns[{index}]");
    let name = RuleName::new(&dto.name).map_err(|e| LoadError::Validation {
        context: format!("{ctx}.name"),
        source: e,
    })?;
    let pattern = Pattern::new(&dto.pattern, dto.ignore_case).map_err(|e| LoadError::Validation {
        context: format!("{ctx}.pattern"),
        source: e,
    })?;

    let check = match (dto.equals, dto.one_of, dto.matches) {
        (Some(expected), None, None) => Check::Equals(Value::from(expected)),
        (None, Some(candidates), None) => {
            Check::OneOf(candidates.into_iter().map(Value::from).collect())
        }
        (None, None, Some(re)) => {
            let re = Pattern::new(&re, false).map_err(|e| LoadError::Validation {
                context: format!("{ctx}.matches"),
                source: e,
            })?;
            Check::Matches(re)
        }
        _ => return Err(LoadError::AmbiguousCheck { context: ctx }),
    };

    Ok(PatternRuleDef::new(name, pattern, dto.description, check))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_and_load(toml_str: &str) -> Result<DeclarativeConfig, LoadError> {
        let dto: DeclarativeConfigDto = toml::from_str(toml_str).unwrap();
        load(dto)
    }

    // -- Happy path --

    #[test]
    fn load_empty_config() {
        let config = parse_and_load("").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn load_full_config() {
        let config = parse_and_load(
            r#"
[[patterns]]
name = "is-one"
pattern = "^is one$"
ignore-case = true
equals = 1

[[patterns]]
name = "is-primary"
pattern = "^is primary$"
one-of = ["red", "green", "blue"]

[[patterns]]
name = "is-slug"
pattern = "^is a slug$"
matches = "^[a-z0-9-]+$"
"#,
        )
        .unwrap();

        let patterns = config.patterns();
        assert_eq!(patterns.len(), 3);
        assert!(matches!(patterns[0].check(), Check::Equals(Value::Number(n)) if *n == 1.0));
        assert!(matches!(patterns[1].check(), Check::OneOf(values) if values.len() == 3));
        assert!(matches!(patterns[2].check(), Check::Matches(_)));
    }

    // -- Error cases --

    #[test]
    fn load_rejects_invalid_name() {
        let result = parse_and_load(
            r#"
[[patterns]]
name = "IsOne"
pattern = "^is one$"
equals = 1
"#,
        );
        let err = result.unwrap_err();
        assert!(
            matches!(&err, LoadError::Validation { context, .. } if context == "patterns[0].name")
        );
    }

    #[test]
    fn load_rejects_invalid_pattern_with_context() {
        let result = parse_and_load(
            r#"
[[patterns]]
name = "fine"
pattern = "^fine$"
equals = true

[[patterns]]
name = "broken"
pattern = "(unclosed"
equals = true
"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("patterns[1].pattern: invalid pattern"));
    }

    #[test]
    fn load_rejects_invalid_matches() {
        let result = parse_and_load(
            r#"
[[patterns]]
name = "bad"
pattern = "^bad$"
matches = "["
"#,
        );
        assert!(
            matches!(result, Err(LoadError::Validation { context, .. }) if context == "patterns[0].matches")
        );
    }

    #[test]
    fn load_rejects_missing_check() {
        let result = parse_and_load(
            r#"
[[patterns]]
name = "bad"
pattern = "^bad$"
"#,
        );
        assert!(matches!(result, Err(LoadError::AmbiguousCheck { .. })));
    }

    #[test]
    fn load_rejects_two_checks() {
        let result = parse_and_load(
            r#"
[[patterns]]
name = "bad"
pattern = "^bad$"
equals = 1
matches = "x"
"#,
        );
        assert!(matches!(result, Err(LoadError::AmbiguousCheck { .. })));
    }

    #[test]
    fn load_rejects_duplicate_names() {
        let result = parse_and_load(
            r#"
[[patterns]]
name = "same"
pattern = "^a$"
equals = 1

[[patterns]]
name = "same"
pattern = "^b$"
equals = 2
"#,
        );
        assert!(matches!(result, Err(LoadError::CrossRef(_))));
    }
}
