//! # enforce
//!
//! Argument validation with English-like rule strings.
//!
//! This is the main facade crate that re-exports core functionality and the
//! built-in rules.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use enforce::enforce;
//!
//! fn set_name(name: Option<&str>) -> Result<(), enforce::EnforceError> {
//!     enforce!(name, "an optional string, with 4 to 12 characters, and matches /^okay$/i")?;
//!     Ok(())
//! }
//! ```
//!
//! The macro takes the parameter name from the identifier and validates
//! against the process-wide [`global()`] validator.
//!
//! ## Class Checks
//!
//! ```rust,ignore
//! let post = enforce::Value::instance(Post::new());
//! enforce!(post, "a {}", Post)?;
//! ```
//!
//! ## Custom Rules
//!
//! ```rust,ignore
//! use enforce::{Regex, Value};
//!
//! enforce::register(Regex::new(r"(?i)^is one$")?, |value, _| *value == Value::from(1));
//!
//! let x = 1;
//! enforce!(x, "a number, is one")?;
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! let validator = enforce::from_toml(&std::fs::read_to_string("enforce.toml")?)?;
//! let value = enforce::Value::from(3);
//! validator.validate(enforce::Param::new("count", &value), "a number, less than 10")?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use enforce_core::*;

pub use regex::Regex;

/// Built-in rules and presets.
pub mod rules {
    pub use enforce_rules::*;
}

mod setup;

pub use setup::{
    from_config, from_file, from_toml, global, register, register_rule, standard, SetupError,
};

/// Validates a parameter, taking its name from the identifier.
///
/// - `enforce!(name, "a string")` validates against [`global()`].
/// - `enforce!(post, "a {}", Post)` is a class check against type `Post`.
/// - `enforce!(validator => name, "a string")` uses an explicit validator.
///
/// The parameter is cloned into a [`Value`]. Evaluates to
/// `Result<(), EnforceError>`.
#[macro_export]
macro_rules! enforce {
    ($param:ident, $rule:expr) => {
        $crate::enforce!($crate::global() => $param, $rule)
    };
    ($param:ident, $rule:expr, $class:ty) => {
        $crate::enforce!($crate::global() => $param, $rule, $class)
    };
    ($validator:expr => $param:ident, $rule:expr) => {{
        let value = $crate::Value::from(::core::clone::Clone::clone(&$param));
        $validator.validate($crate::Param::new(stringify!($param), &value), $rule)
    }};
    ($validator:expr => $param:ident, $rule:expr, $class:ty) => {{
        let value = $crate::Value::from(::core::clone::Clone::clone(&$param));
        $validator.validate_instance(
            $crate::Param::new(stringify!($param), &value),
            $rule,
            &$crate::ClassArg::of::<$class>(stringify!($class)),
        )
    }};
}
