//! CLI argument definitions for the woodwave command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};

use crate::input::BoardOverrides;

/// Woodwave - wood-block relief pattern generator
#[derive(Parser)]
#[command(name = "woodwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the pattern catalog
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the 10x10 base field of a pattern
    Field {
        /// Pattern id (wraps cyclically: 11 is 1, 0 is 10)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        pattern: i64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Expand a pattern to a full board and print it
    Board {
        #[command(flatten)]
        board: BoardArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a board to a PNG image
    Render {
        /// Output PNG path
        #[arg(short, long)]
        out: String,

        #[command(flatten)]
        board: BoardArgs,

        /// Pixels per cell (1-64)
        #[arg(long)]
        cell_px: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Board selection flags shared by `board` and `render`.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Path to a JSON board config
    #[arg(short, long)]
    pub config: Option<String>,

    /// Pattern id (overrides config)
    #[arg(short, long, allow_negative_numbers = true)]
    pub pattern: Option<i64>,

    /// Board side in blocks, clamped to 5-30 (overrides config)
    #[arg(short, long, allow_negative_numbers = true)]
    pub size: Option<i64>,
}

impl BoardArgs {
    /// Flag overrides for config loading.
    pub fn overrides(&self, cell_px: Option<u32>) -> BoardOverrides {
        BoardOverrides {
            pattern_id: self.pattern,
            grid_size: self.size,
            cell_px,
        }
    }
}
