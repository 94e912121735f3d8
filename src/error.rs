// src/error.rs
use classwright_compiler::ConfigError;
use classwright_style::StyleParseError;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
///
/// Compilation itself cannot fail; these cover reading input, loading configuration and
/// strict-mode validation.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Style record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Style record failed validation: {0}")]
    Style(#[from] StyleParseError),
}
