//! Woodwave CLI - command-line interface for wood-block relief patterns
//!
//! This binary lists the pattern catalog, shows base fields, and expands
//! patterns to full boards as text, JSON or PNG.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use woodwave_cli::cli_args::{Cli, Commands};
use woodwave_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Field { pattern, json } => commands::field::run(pattern, json),
        Commands::Board { board, json } => {
            commands::board::run(board.config.as_deref(), &board.overrides(None), json)
        }
        Commands::Render {
            out,
            board,
            cell_px,
            json,
        } => commands::render::run(
            &out,
            board.config.as_deref(),
            &board.overrides(cell_px),
            json,
        ),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "ERROR".red().bold(), err);
            ExitCode::from(1)
        }
    }
}
