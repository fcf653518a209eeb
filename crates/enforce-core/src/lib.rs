//! # enforce-core
//!
//! Core framework for validating arguments against English-like rule strings.
//!
//! This crate provides the foundational types for building validators:
//!
//! - [`Value`] for the dynamic values under test
//! - [`RuleDefinition`] and [`Clause`] for parsed rule strings
//! - [`WholeRule`] and the [`PartialRule`] trait for the two rule families
//! - [`Validator`] for dispatching a rule string against a value
//! - [`EnforceError`] for the two failure kinds
//!
//! ## Example
//!
//! ```ignore
//! use enforce_core::{Param, Validator, Value, WholeRule};
//!
//! let validator = Validator::builder()
//!     .whole_rule(WholeRule::new("a string", |v| v.as_str().is_some()))
//!     .partial_rules(my_rules())
//!     .build();
//!
//! let name = Value::from("okay");
//! validator.validate(Param::new("name", &name), "a string, with 4 to 12 characters")?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clause;
mod config;
mod error;
mod primitive;
mod registry;
mod rule;
mod validator;
mod value;

/// Declarative partial rules loaded from TOML.
pub mod declarative;

pub use clause::{
    grammar, Clause, ClauseKind, ComparisonOp, ParseError, RuleDefinition, PLACEHOLDER,
};
pub use config::{Config, ConfigError, PhraseCase, RuleConfig, ValidatorConfig};
pub use error::{EnforceError, FormatFailure, FormatReason, ValidationFailure};
pub use primitive::{is_instance_of, Primitive};
pub use registry::{PartialRuleRegistry, Snapshot, WholeRuleRegistry};
pub use rule::{FnRule, PartialRule, PartialRuleBox, WholeRule};
pub use validator::{ClassArg, Param, Validator, ValidatorBuilder};
pub use value::{ClassRef, Function, Instance, Value};
