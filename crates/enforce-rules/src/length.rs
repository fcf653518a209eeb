//! Shared length measurement for the character-count rules.

use enforce_core::Value;

/// Character count of a string or element count of an array.
///
/// Any other value has no length.
pub(crate) fn measure(value: &Value) -> Option<u64> {
    let len = match value {
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        _ => return None,
    };
    u64::try_from(len).ok()
}
