//! Declarative partial rules driven by TOML configuration.
//!
//! This module lets a project add clause patterns without writing Rust
//! rule code.
//!
//! # Architecture
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! config_dto types
//!   ↓ validate + convert
//! DeclarativeConfig (pure domain model)
//!   ↓ load_rules_from_toml()
//! Vec<PartialRuleBox>
//! ```

use std::sync::Arc;

pub mod config_dto;
pub mod loader;
pub mod model;
pub mod rules;

/// Errors from parsing TOML and loading declarative rules.
#[derive(Debug, thiserror::Error)]
pub enum LoadRulesError {
    /// TOML deserialization failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Domain model validation failed.
    #[error("{0}")]
    Load(#[from] loader::LoadError),
}

/// Parses TOML content and creates all declarative rules, in declared order.
///
/// Returns `Ok(vec![])` if no `[[patterns]]` section is present.
///
/// # Errors
///
/// Returns an error if TOML parsing or model validation fails.
pub fn load_rules_from_toml(
    content: &str,
) -> Result<Vec<crate::rule::PartialRuleBox>, LoadRulesError> {
    let dto: config_dto::DeclarativeConfigDto = toml::from_str(content)?;
    let config = loader::load(dto)?;
    Ok(create_rules(config))
}

/// Creates all declarative rules from a validated [`model::DeclarativeConfig`].
#[must_use]
pub fn create_rules(config: model::DeclarativeConfig) -> Vec<crate::rule::PartialRuleBox> {
    config
        .patterns()
        .iter()
        .map(|def| {
            let rule: crate::rule::PartialRuleBox = Arc::new(rules::PatternRule::new(def.clone()));
            rule
        })
        .collect()
}
