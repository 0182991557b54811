//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`; these are the shapes it prints.

use serde::Serialize;
use woodwave_pattern::{ConfigError, LegendEntry, PatternParams, PngError};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Config file could not be read
    pub const CONFIG_READ: &str = "CLI_001";
    /// Config file is not valid JSON or has unknown fields
    pub const CONFIG_PARSE: &str = "CLI_002";
    /// Config parameter out of range
    pub const INVALID_CONFIG: &str = "CLI_003";
    /// PNG could not be written
    pub const PNG_WRITE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Maps a config loading error onto a stable code.
pub fn config_error_to_json(err: &ConfigError, file: Option<&str>) -> JsonError {
    let code = match err {
        ConfigError::Io(_) => error_codes::CONFIG_READ,
        ConfigError::Json(_) => error_codes::CONFIG_PARSE,
        ConfigError::InvalidParameter { .. } => error_codes::INVALID_CONFIG,
    };
    let error = JsonError::new(code, err.to_string());
    match file {
        Some(path) => error.with_file(path),
        None => error,
    }
}

/// Maps a PNG error onto a stable code.
pub fn png_error_to_json(err: &PngError, file: &str) -> JsonError {
    JsonError::new(error_codes::PNG_WRITE, err.to_string()).with_file(file)
}

/// One catalog entry as listed by `list`.
#[derive(Debug, Clone, Serialize)]
pub struct PatternEntry {
    /// Canonical id (1..=10)
    pub id: i64,
    /// Full parameter record
    #[serde(flatten)]
    pub params: PatternParams,
}

/// JSON output for the `list` command.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    /// Catalog entries in id order
    pub patterns: Vec<PatternEntry>,
}

/// JSON output for the `field` command.
#[derive(Debug, Clone, Serialize)]
pub struct FieldOutput {
    /// Id as requested
    pub requested_id: i64,
    /// Canonical id it resolved to
    pub pattern_id: i64,
    /// Parameter record
    pub params: PatternParams,
    /// Base field rows in millimetres
    pub rows: Vec<Vec<u8>>,
    /// Color legend
    pub legend: Vec<LegendEntry>,
}

/// Shared success/error envelope for `board` and `render`.
#[derive(Debug, Clone, Serialize)]
pub struct BoardOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Board details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<BoardResult>,
}

impl BoardOutput {
    /// Creates a successful output.
    pub fn success(result: BoardResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Board details shared by `board` and `render`.
#[derive(Debug, Clone, Serialize)]
pub struct BoardResult {
    /// Canonical pattern id
    pub pattern_id: i64,
    /// Display name of the pattern
    pub label: String,
    /// "mirrored" or "periodic"
    pub tiling: String,
    /// Grid size as requested
    pub requested_grid_size: i64,
    /// Grid size actually used
    pub grid_size: usize,
    /// Cell counts per level, lowest first
    pub level_histogram: [usize; 4],
    /// BLAKE3 hash of the board cells
    pub content_hash: String,
    /// Board rows (`board` only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<u8>>>,
    /// Written PNG path (`render` only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// BLAKE3 hash of the PNG bytes (`render` only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_codes() {
        let err = ConfigError::InvalidParameter {
            name: "cell_px".into(),
            message: "too big".into(),
        };
        let json = config_error_to_json(&err, Some("board.json"));
        assert_eq!(json.code, error_codes::INVALID_CONFIG);
        assert_eq!(json.file.as_deref(), Some("board.json"));
    }

    #[test]
    fn test_failure_omits_result() {
        let output = BoardOutput::failure(vec![JsonError::new("CLI_001", "nope")]);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("result").is_none());
        assert!(value["errors"][0].get("file").is_none());
    }

    #[test]
    fn test_pattern_entry_flattens_params() {
        let entry = PatternEntry {
            id: 6,
            params: *woodwave_pattern::get_pattern_params(6),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], 6);
        assert_eq!(value["kind"], "circular");
        assert_eq!(value["tiling"], "mirrored");
    }
}
