//! Field command implementation
//!
//! Shows the 10×10 base field of a pattern with the color legend.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use woodwave_pattern::{
    canonical_pattern_id, generate_base_field, get_pattern_params, legend, BaseField, HeightLevel,
};

use super::json_output::FieldOutput;

/// Run the field command
///
/// # Arguments
/// * `pattern_id` - Pattern id (any integer, wrapped into the catalog)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success
pub fn run(pattern_id: i64, json_output: bool) -> Result<ExitCode> {
    let params = get_pattern_params(pattern_id);
    let field = generate_base_field(params);

    if json_output {
        let output = FieldOutput {
            requested_id: pattern_id,
            pattern_id: canonical_pattern_id(pattern_id),
            params: *params,
            rows: field.rows().map(<[u8]>::to_vec).collect(),
            legend: legend(),
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize field")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {}: {}",
        "Pattern".cyan().bold(),
        canonical_pattern_id(pattern_id),
        params.label
    );
    println!(
        "{} {}x{} base field (mm), {}",
        "Field:".dimmed(),
        field.side(),
        field.side(),
        params.tiling.description()
    );
    println!();
    print!("{}", render_table(&field));
    println!();
    print_legend();

    Ok(ExitCode::SUCCESS)
}

/// Formats the field as a table with 1-based row and column headers.
pub(crate) fn render_table(field: &BaseField) -> String {
    let mut out = String::new();
    out.push_str("     ");
    for col in 1..=field.side() {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');

    for (row_idx, row) in field.rows().enumerate() {
        out.push_str(&format!("{:>4} ", row_idx + 1));
        for &mm in row {
            out.push_str(&format!("{}", cell(mm)));
        }
        out.push('\n');
    }
    out
}

fn cell(mm: u8) -> colored::ColoredString {
    let text = format!("{:>3}", mm);
    match HeightLevel::from_millimeters(mm) {
        Some(level) => {
            let [r, g, b] = level.color();
            let [tr, tg, tb] = level.text_color();
            text.truecolor(tr, tg, tb).on_truecolor(r, g, b)
        }
        None => text.normal(),
    }
}

fn print_legend() {
    for level in HeightLevel::ALL {
        let [r, g, b] = level.color();
        println!(
            "  {} level {} = {} mm",
            "   ".on_truecolor(r, g, b),
            level.index(),
            level.millimeters()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_header_and_rows() {
        colored::control::set_override(false);
        let field = generate_base_field(get_pattern_params(10));
        let table = render_table(&field);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 11);
        assert!(lines[0].trim_start().starts_with("1  2  3"));
        assert!(lines[0].trim_end().ends_with("10"));
        assert!(lines[1].starts_with("   1 "));
        assert_eq!(lines[1].split_whitespace().skip(1).take(2).collect::<Vec<_>>(), ["6", "0"]);
    }
}
