//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# enforce configuration

[validator]
# How type phrases are compared: "sensitive" (default) or "insensitive"
phrase-case = "sensitive"

# Built-in clause rules, by name (see `enforce list-rules`)
# Each rule can be disabled and some take options

# `with up to N characters` passes when length >= N by default.
# Set bound = "at-most" to pass when length <= N instead.
[rules.length-up-to]
enabled = true
bound = "at-least"

# [rules.matches]
# enabled = false

# Custom clause rules, tried after the built-ins in declared order.
# Each needs exactly one of: equals, one-of, matches

# [[patterns]]
# name = "is-one"
# pattern = "^is one$"
# ignore-case = true
# equals = 1

# [[patterns]]
# name = "is-primary"
# pattern = "^is a primary colou?r$"
# description = "red, green or blue"
# one-of = ["red", "green", "blue"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("enforce.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created enforce.toml");
    println!("\nNext steps:");
    println!("  1. Edit enforce.toml to configure rules");
    println!("  2. Run: enforce check --rule \"a number, less than 10\" --value 3");

    Ok(())
}
