//! Woodwave CLI library.
//!
//! Argument parsing, config loading and the command implementations behind
//! the `woodwave` binary.

pub mod cli_args;
pub mod commands;
pub mod input;

#[cfg(test)]
mod tests {
    use super::cli_args::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parses_field_negative_pattern() {
        let cli = Cli::try_parse_from(["woodwave", "field", "--pattern", "-3"]).unwrap();
        match cli.command {
            Commands::Field { pattern, json } => {
                assert_eq!(pattern, -3);
                assert!(!json);
            }
            _ => panic!("expected field command"),
        }
    }

    #[test]
    fn test_cli_parses_board_flags() {
        let cli = Cli::try_parse_from([
            "woodwave", "board", "-p", "7", "-s", "20", "--config", "b.json", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Board { board, json } => {
                assert!(json);
                assert_eq!(board.config.as_deref(), Some("b.json"));
                let overrides = board.overrides(None);
                assert_eq!(overrides.pattern_id, Some(7));
                assert_eq!(overrides.grid_size, Some(20));
                assert_eq!(overrides.cell_px, None);
            }
            _ => panic!("expected board command"),
        }
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "woodwave", "render", "--out", "board.png", "--cell-px", "8",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                out,
                board,
                cell_px,
                json,
            } => {
                assert_eq!(out, "board.png");
                assert_eq!(cell_px, Some(8));
                assert!(board.pattern.is_none());
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_render_requires_out() {
        assert!(Cli::try_parse_from(["woodwave", "render"]).is_err());
    }

    #[test]
    fn test_cli_accepts_negative_size() {
        let cli = Cli::try_parse_from(["woodwave", "board", "--size", "-4"]).unwrap();
        match cli.command {
            Commands::Board { board, .. } => assert_eq!(board.size, Some(-4)),
            _ => panic!("expected board command"),
        }
    }

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["woodwave", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::List { json: true }));
    }
}
