//! Render command implementation
//!
//! Writes a top-down PNG of an expanded board.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use woodwave_pattern::png::{write_board_to_vec_with_hash, PngConfig};

use super::board::{board_result, build_board, print_size_line};
use super::json_output::{config_error_to_json, png_error_to_json, BoardOutput};
use crate::input::{load_board_config, BoardOverrides};

/// Run the render command
///
/// # Arguments
/// * `out` - Output PNG path
/// * `config_path` - Optional JSON board config
/// * `overrides` - Flag values that replace config values
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    out: &str,
    config_path: Option<&str>,
    overrides: &BoardOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(out, config_path, overrides)
    } else {
        run_human(out, config_path, overrides)
    }
}

fn run_human(out: &str, config_path: Option<&str>, overrides: &BoardOverrides) -> Result<ExitCode> {
    println!("{} {}", "Rendering:".cyan().bold(), out);

    let loaded = load_board_config(config_path.map(Path::new), overrides)
        .context("Failed to load board config")?;
    let board = build_board(&loaded);
    print_size_line(&loaded, &board);

    let (data, png_hash) =
        write_board_to_vec_with_hash(&board, loaded.config.cell_px, &PngConfig::default())
            .context("Failed to encode PNG")?;
    write_output(out, &data)?;

    println!(
        "{} Wrote {} ({} px per cell, {})",
        "SUCCESS".green().bold(),
        out,
        loaded.config.cell_px,
        &png_hash[..16]
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(out: &str, config_path: Option<&str>, overrides: &BoardOverrides) -> Result<ExitCode> {
    let output = match load_board_config(config_path.map(Path::new), overrides) {
        Err(err) => BoardOutput::failure(vec![config_error_to_json(&err, config_path)]),
        Ok(loaded) => {
            let board = build_board(&loaded);
            match write_board_to_vec_with_hash(&board, loaded.config.cell_px, &PngConfig::default())
            {
                Err(err) => BoardOutput::failure(vec![png_error_to_json(&err, out)]),
                Ok((data, png_hash)) => {
                    write_output(out, &data)?;
                    let mut result = board_result(&loaded, &board);
                    result.output_path = Some(out.to_string());
                    result.png_hash = Some(png_hash);
                    BoardOutput::success(result)
                }
            }
        }
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize render output")?;
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn write_output(out: &str, data: &[u8]) -> Result<()> {
    if let Some(parent) = Path::new(out).parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(out, data).with_context(|| format!("Failed to write PNG: {}", out))
}
