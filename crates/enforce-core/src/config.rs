//! Configuration types for enforce.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Validator configuration.
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Per-rule configurations, keyed by built-in rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the configuration of a rule, if any.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }
}

/// How whole-rule phrases are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseCase {
    /// Exact, case-sensitive comparison.
    #[default]
    Sensitive,
    /// Phrases are lowercased before comparison.
    Insensitive,
}

/// Validator-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ValidatorConfig {
    /// Whole-rule phrase comparison.
    #[serde(default)]
    pub phrase_case: PhraseCase,
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.validator.phrase_case, PhraseCase::Sensitive);
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("length-range"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[validator]
phrase-case = "insensitive"

[rules.length-up-to]
bound = "at-most"

[rules.matches]
enabled = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.validator.phrase_case, PhraseCase::Insensitive);
        assert!(config.is_rule_enabled("length-up-to"));
        assert!(!config.is_rule_enabled("matches"));

        let rule_config = config.rule("length-up-to").unwrap();
        assert_eq!(rule_config.get_str("bound", "at-least"), "at-most");
        assert_eq!(rule_config.get_str("missing", "fallback"), "fallback");
    }

    #[test]
    fn test_parse_ignores_declarative_sections() {
        let toml = r#"
[[patterns]]
name = "is-one"
pattern = "^is one$"
equals = 1
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("validator = 3").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));
    }
}
