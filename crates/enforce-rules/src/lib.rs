//! # enforce-rules
//!
//! Built-in rules for enforce.
//!
//! Type clauses resolve against the whole-rule phrases of [`whole_rules`];
//! modifier clauses resolve against the partial rules below, tried in this
//! order.
//!
//! ## Available Rules
//!
//! | Code | Name | Clause | Check |
//! |------|------|--------|-------|
//! | EN001 | `length-range` | `with N to M characters` | `N <= length <= M` |
//! | EN002 | `length-at-least` | `with N or more characters` | `length >= N` |
//! | EN003 | `length-up-to` | `with up to N characters` | `length >= N` (configurable) |
//! | EN004 | `greater-than` | `greater than N` | `value > N` |
//! | EN005 | `greater-or-equal` | `greater than or equal to N` | `value >= N` |
//! | EN006 | `less-than` | `less than N` | `value < N` |
//! | EN007 | `less-or-equal` | `less than or equal to N` | `value <= N` |
//! | EN008 | `matches` | `[and ]matches /regex/flag` | the string matches |
//!
//! ## Usage
//!
//! ```ignore
//! use enforce_core::Validator;
//!
//! let validator = Validator::builder()
//!     .whole_rules(enforce_rules::whole_rules())
//!     .partial_rules(enforce_rules::all_rules())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod comparison;
mod length;
mod length_at_least;
mod length_range;
mod length_up_to;
mod matches;
mod presets;
mod types;

pub use comparison::Comparison;
pub use length_at_least::LengthAtLeast;
pub use length_range::LengthRange;
pub use length_up_to::{LengthUpTo, UpToBound};
pub use matches::Matches;
pub use presets::{all_rules, configured_rules, PresetError};
pub use types::whole_rules;

/// Re-export core types for convenience.
pub use enforce_core::{PartialRule, PartialRuleBox, WholeRule};
