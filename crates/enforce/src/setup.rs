//! Validator construction and the process-wide instance.

use enforce_core::declarative::{self, LoadRulesError};
use enforce_core::{Clause, Config, ConfigError, PartialRule, Validator, Value};
use enforce_rules::PresetError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static GLOBAL: LazyLock<Validator> = LazyLock::new(|| {
    debug!("building global validator");
    standard()
});

/// Errors from building a validator out of configuration.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The configuration could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A built-in rule option is invalid.
    #[error(transparent)]
    Preset(#[from] PresetError),

    /// A `[[patterns]]` entry is invalid.
    #[error("declarative config error: {0}")]
    Rules(#[from] LoadRulesError),
}

/// Returns a validator with every built-in rule and default settings.
#[must_use]
pub fn standard() -> Validator {
    Validator::builder()
        .whole_rules(enforce_rules::whole_rules())
        .partial_rules(enforce_rules::all_rules())
        .build()
}

/// Returns a validator with the built-in rules as configured.
///
/// # Errors
///
/// Returns an error if a rule option has an unknown value.
pub fn from_config(config: &Config) -> Result<Validator, PresetError> {
    Ok(Validator::builder()
        .config(config.validator.clone())
        .whole_rules(enforce_rules::whole_rules())
        .partial_rules(enforce_rules::configured_rules(config)?)
        .build())
}

/// Builds a validator from TOML content.
///
/// Declarative `[[patterns]]` rules are appended after the built-ins, in
/// declared order.
///
/// # Errors
///
/// Returns an error if the content is not a valid configuration.
pub fn from_toml(content: &str) -> Result<Validator, SetupError> {
    let config = Config::parse(content)?;
    let validator = from_config(&config)?;
    let rules = declarative::load_rules_from_toml(content)?;
    debug!(count = rules.len(), "loaded declarative rules");
    for rule in rules {
        validator.register_rule_box(rule);
    }
    Ok(validator)
}

/// Builds a validator from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid
/// configuration.
pub fn from_file(path: &Path) -> Result<Validator, SetupError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    from_toml(&content)
}

/// Returns the process-wide validator used by [`enforce!`](crate::enforce).
///
/// Built on first use with [`standard()`].
pub fn global() -> &'static Validator {
    &GLOBAL
}

/// Appends a partial rule to the process-wide validator.
pub fn register<F>(pattern: Regex, evaluator: F)
where
    F: Fn(&Value, &Clause) -> bool + Send + Sync + 'static,
{
    global().register(pattern, evaluator);
}

/// Appends a partial rule to the process-wide validator.
pub fn register_rule<R: PartialRule + 'static>(rule: R) {
    global().register_rule(rule);
}
