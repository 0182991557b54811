//! Board command implementation
//!
//! Expands a pattern to a full board and prints it with a level summary.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use woodwave_pattern::{get_pattern_params, Board, HeightLevel};

use super::json_output::{config_error_to_json, BoardOutput, BoardResult};
use crate::input::{load_board_config, BoardOverrides, LoadResult};

/// Run the board command
///
/// # Arguments
/// * `config_path` - Optional JSON board config
/// * `overrides` - Flag values that replace config values
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 config error
pub fn run(
    config_path: Option<&str>,
    overrides: &BoardOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config_path, overrides)
    } else {
        run_human(config_path, overrides)
    }
}

fn run_human(config_path: Option<&str>, overrides: &BoardOverrides) -> Result<ExitCode> {
    let loaded = load_board_config(config_path.map(Path::new), overrides).with_context(|| {
        format!(
            "Failed to load board config{}",
            config_path.map(|p| format!(": {}", p)).unwrap_or_default()
        )
    })?;
    let board = build_board(&loaded);
    let params = get_pattern_params(board.pattern_id());

    println!(
        "{} {}: {}",
        "Pattern".cyan().bold(),
        board.pattern_id(),
        params.label
    );
    print_size_line(&loaded, &board);
    println!();

    for row in board.rows() {
        let line: Vec<String> = row.iter().map(|&mm| (mm / 2).to_string()).collect();
        println!("  {}", line.join(" "));
    }
    println!();

    let histogram = board.level_histogram();
    for level in HeightLevel::ALL {
        println!(
            "  level {} ({} mm): {}",
            level.index(),
            level.millimeters(),
            histogram[level.index()]
        );
    }
    println!("{} {}", "Hash:".dimmed(), &board.content_hash()[..16]);

    Ok(ExitCode::SUCCESS)
}

fn run_json(config_path: Option<&str>, overrides: &BoardOverrides) -> Result<ExitCode> {
    let (output, code) = match load_board_config(config_path.map(Path::new), overrides) {
        Ok(loaded) => {
            let board = build_board(&loaded);
            let mut result = board_result(&loaded, &board);
            result.rows = Some(board.rows().map(<[u8]>::to_vec).collect());
            (BoardOutput::success(result), ExitCode::SUCCESS)
        }
        Err(err) => (
            BoardOutput::failure(vec![config_error_to_json(&err, config_path)]),
            ExitCode::from(1),
        ),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize board")?;
    println!("{}", json);
    Ok(code)
}

pub(crate) fn build_board(loaded: &LoadResult) -> Board {
    Board::for_pattern(loaded.config.pattern_id, loaded.config.grid_size as usize)
}

pub(crate) fn board_result(loaded: &LoadResult, board: &Board) -> BoardResult {
    BoardResult {
        pattern_id: board.pattern_id(),
        label: get_pattern_params(board.pattern_id()).label.to_string(),
        tiling: board.tiling().as_str().to_string(),
        requested_grid_size: loaded.requested_grid_size,
        grid_size: board.size(),
        level_histogram: board.level_histogram(),
        content_hash: board.content_hash(),
        rows: None,
        output_path: None,
        png_hash: None,
    }
}

pub(crate) fn print_size_line(loaded: &LoadResult, board: &Board) {
    println!(
        "{} {}x{} ({}, config from {})",
        "Board:".dimmed(),
        board.size(),
        board.size(),
        board.tiling().description(),
        loaded.source.as_str()
    );
    if loaded.grid_size_clamped() {
        println!(
            "  {} grid size {} clamped to {}",
            "!".yellow(),
            loaded.requested_grid_size,
            board.size()
        );
    }
}
