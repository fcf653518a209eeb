//! Rule sets assembled from the built-ins.

use crate::length_up_to::{self, UpToBound};
use crate::{Comparison, LengthAtLeast, LengthRange, LengthUpTo, Matches};
use enforce_core::{Config, PartialRuleBox};
use std::sync::Arc;
use tracing::debug;

/// Errors from applying rule options in configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresetError {
    /// An option value is not one the rule understands.
    #[error("[rules.{rule}] {key}: {message}")]
    InvalidOption {
        /// Rule name.
        rule: String,
        /// Option key.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Returns every built-in partial rule with default settings, in priority
/// order.
///
/// Includes:
/// - `length-range` (EN001)
/// - `length-at-least` (EN002)
/// - `length-up-to` (EN003)
/// - `greater-than` (EN004), `greater-or-equal` (EN005)
/// - `less-than` (EN006), `less-or-equal` (EN007)
/// - `matches` (EN008)
#[must_use]
pub fn all_rules() -> Vec<PartialRuleBox> {
    builtin_rules(LengthUpTo::new())
}

/// The built-ins in priority order, with `up_to` in the EN003 slot.
fn builtin_rules(up_to: LengthUpTo) -> Vec<PartialRuleBox> {
    vec![
        Arc::new(LengthRange::new()),
        Arc::new(LengthAtLeast::new()),
        Arc::new(up_to),
        Arc::new(Comparison::greater_than()),
        Arc::new(Comparison::greater_or_equal()),
        Arc::new(Comparison::less_than()),
        Arc::new(Comparison::less_or_equal()),
        Arc::new(Matches::new()),
    ]
}

/// Returns the built-in partial rules as configured.
///
/// Rules disabled in `[rules.<name>]` are left out; the others keep their
/// relative order.
///
/// # Errors
///
/// Returns an error if a rule option has an unknown value.
pub fn configured_rules(config: &Config) -> Result<Vec<PartialRuleBox>, PresetError> {
    let mut up_to = LengthUpTo::new();
    if let Some(rule_config) = config.rule(length_up_to::NAME) {
        let raw = rule_config.get_str("bound", UpToBound::AtLeast.as_str());
        let bound = raw
            .parse::<UpToBound>()
            .map_err(|message| PresetError::InvalidOption {
                rule: length_up_to::NAME.to_string(),
                key: "bound".to_string(),
                message,
            })?;
        up_to = up_to.bound(bound);
    }

    Ok(builtin_rules(up_to)
        .into_iter()
        .filter(|rule| {
            let enabled = config.is_rule_enabled(rule.name());
            if !enabled {
                debug!(rule = rule.name(), "rule disabled by configuration");
            }
            enabled
        })
        .collect())
}
