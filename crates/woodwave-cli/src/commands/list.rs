//! List command implementation
//!
//! Prints the pattern catalog.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use woodwave_pattern::catalog::entries;

use super::json_output::{ListOutput, PatternEntry};

/// Run the list command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success
pub fn run(json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output = ListOutput {
            patterns: entries()
                .map(|(id, params)| PatternEntry {
                    id,
                    params: *params,
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize catalog")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Pattern catalog:".cyan().bold());
    for (id, params) in entries() {
        println!(
            "  {:>2}  {:<32} {:<13} {}",
            id.to_string().bold(),
            params.label,
            params.kind.as_str(),
            params.tiling.as_str().dimmed()
        );
    }
    println!(
        "{}",
        "Ids outside 1-10 wrap around (11 is 1, 0 is 10).".dimmed()
    );

    Ok(ExitCode::SUCCESS)
}
