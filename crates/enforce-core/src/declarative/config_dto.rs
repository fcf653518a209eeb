//! TOML deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization.
//! They are converted to domain model types via the loader.

use serde::Deserialize;

/// Raw TOML representation of declarative rules.
///
/// Extends the base `Config` with `[[patterns]]` sections. Other tables are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeclarativeConfigDto {
    /// Pattern rule definitions, in priority order.
    #[serde(default)]
    pub patterns: Vec<PatternDto>,
}

/// TOML representation of a pattern rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PatternDto {
    /// Rule name (e.g., "is-one").
    pub name: String,
    /// Regular expression over the clause text.
    pub pattern: String,
    /// Match the clause text case-insensitively.
    #[serde(default)]
    pub ignore_case: bool,
    /// Text shown by `list-rules`.
    #[serde(default)]
    pub description: Option<String>,
    /// The value must equal this.
    #[serde(default)]
    pub equals: Option<toml::Value>,
    /// The value must equal one of these.
    #[serde(default)]
    pub one_of: Option<Vec<toml::Value>>,
    /// The value must be a string matching this expression.
    #[serde(default)]
    pub matches: Option<String>,
}
