//! List rules command implementation.

use anyhow::Result;

use crate::config_resolver::ConfigSource;

/// Runs the list-rules command.
pub fn run(source: &ConfigSource) -> Result<()> {
    let validator = super::load_validator(source)?;

    println!("Type phrases:\n");
    for rule in validator.whole_rules().rules() {
        println!("  {}", rule.phrase());
    }

    println!("\nClause rules (tried in order):\n");
    println!("{:<10} {:<25} Clause", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in validator.partial_rules().rules() {
        let code = if rule.code().is_empty() { "-" } else { rule.code() };
        println!("{:<10} {:<25} {}", code, rule.name(), rule.description());
    }

    println!("\nClass checks take the form `a {{}}` or `an {{}}` with a class argument.");
    println!("\nDisable or configure rules in enforce.toml, e.g.:");
    println!("  [rules.length-up-to]");
    println!("  bound = \"at-most\"");

    Ok(())
}
