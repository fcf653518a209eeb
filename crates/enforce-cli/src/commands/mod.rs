//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use enforce::Validator;

use crate::config_resolver::ConfigSource;

/// Builds the validator for a resolved configuration source.
pub fn load_validator(source: &ConfigSource) -> Result<Validator> {
    let Some(path) = source.path() else {
        return Ok(enforce::standard());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    enforce::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
