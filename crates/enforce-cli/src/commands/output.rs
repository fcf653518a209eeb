//! Shared output formatting for check results.

use anyhow::Result;
use enforce::EnforceError;
use serde::Serialize;

use crate::OutputFormat;

/// Machine-readable check result.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Report<'a> {
    /// `ok`, `validation` or `format`.
    pub status: &'static str,
    /// Parameter name.
    pub name: &'a str,
    /// Rule string as given.
    pub rule: &'a str,
    /// Error message, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'a> Report<'a> {
    /// Builds the report for a check outcome.
    #[must_use]
    pub fn new(name: &'a str, rule: &'a str, error: Option<&EnforceError>) -> Self {
        let status = match error {
            None => "ok",
            Some(EnforceError::Validation(_)) => "validation",
            Some(EnforceError::Format(_)) => "format",
        };
        Self {
            status,
            name,
            rule,
            message: error.map(ToString::to_string),
        }
    }
}

/// Print a check outcome in the specified format.
pub fn print(
    name: &str,
    rule: &str,
    error: Option<&EnforceError>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(name, rule, error),
        OutputFormat::Json => return print_json(&Report::new(name, rule, error)),
    }
    Ok(())
}

fn print_text(name: &str, rule: &str, error: Option<&EnforceError>) {
    match error {
        None => println!("\x1b[32mok\x1b[0m '{name}' is {rule}"),
        Some(err) => eprintln!("{:?}", miette::Report::new(err.clone())),
    }
}

fn print_json(report: &Report<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
