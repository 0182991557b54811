//! CLI command implementations

pub mod board;
pub mod field;
pub mod json_output;
pub mod list;
pub mod render;
