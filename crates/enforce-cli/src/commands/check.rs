//! Check command implementation.

use anyhow::{Context, Result};
use enforce::{EnforceError, Param, Validator, Value};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Exit code for a value that breaks the rule.
pub const EXIT_VALIDATION: i32 = 1;

/// Exit code for a rule string that cannot be resolved.
pub const EXIT_FORMAT: i32 = 2;

/// Runs the check command.
pub fn run(
    rule: &str,
    name: &str,
    value: Option<&str>,
    format: OutputFormat,
    source: &ConfigSource,
) -> Result<()> {
    let validator = super::load_validator(source)?;
    let value = parse_value(value)?;

    tracing::debug!("Checking '{}' ({}) against {:?}", name, value.type_name(), rule);

    let outcome = evaluate(&validator, name, &value, rule);
    super::output::print(name, rule, outcome.as_ref().err(), format)?;

    match outcome {
        Ok(()) => Ok(()),
        Err(EnforceError::Validation(_)) => std::process::exit(EXIT_VALIDATION),
        Err(EnforceError::Format(_)) => std::process::exit(EXIT_FORMAT),
    }
}

/// Parses the `--value` argument; absent means the parameter was not supplied.
fn parse_value(raw: Option<&str>) -> Result<Value> {
    let Some(raw) = raw else {
        return Ok(Value::Void);
    };
    let json: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("--value is not valid JSON: {raw}"))?;
    Ok(Value::from(json))
}

fn evaluate(
    validator: &Validator,
    name: &str,
    value: &Value,
    rule: &str,
) -> Result<(), EnforceError> {
    validator.validate(Param::new(name, value), rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_is_void() {
        assert!(parse_value(None).unwrap().is_void());
    }

    #[test]
    fn json_values() {
        assert_eq!(parse_value(Some("null")).unwrap(), Value::Null);
        assert_eq!(parse_value(Some("3")).unwrap(), Value::Number(3.0));
        assert_eq!(
            parse_value(Some("\"okay\"")).unwrap(),
            Value::String("okay".into())
        );
        assert!(matches!(parse_value(Some("[1, 2]")).unwrap(), Value::Array(_)));
        assert!(matches!(parse_value(Some("{\"a\": 1}")).unwrap(), Value::Object(_)));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = parse_value(Some("okay")).unwrap_err();
        assert!(err.to_string().contains("--value is not valid JSON"));
    }

    #[test]
    fn evaluate_distinguishes_failure_kinds() {
        let validator = enforce::standard();
        let value = Value::from("abc");

        assert!(evaluate(&validator, "s", &value, "a string, with 1 to 3 characters").is_ok());
        assert!(evaluate(&validator, "s", &value, "a number")
            .unwrap_err()
            .is_validation());
        assert!(evaluate(&validator, "s", &value, "a widget")
            .unwrap_err()
            .is_format());
    }
}
