//! Compiler configuration, loadable from a JSON file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid entry '{entry}' in table '{table}': {reason}")]
    InvalidRule {
        table: &'static str,
        entry: String,
        reason: String,
    },
}

/// How whitespace inside an arbitrary value is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArbitraryValues {
    /// Keep the raw value exactly as typed, spaces included. (Default)
    #[default]
    Verbatim,
    /// Replace each whitespace run with `_`, so a multi-value spec stays one class.
    Underscored,
}

/// A substring rule for the lossy shadow/border detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TintRule {
    /// Text searched for in the raw CSS value.
    pub needle: String,
    /// Token emitted after the generic keyword when `needle` is found.
    pub token: String,
}

impl TintRule {
    pub fn new(needle: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            token: token.into(),
        }
    }
}

/// Extra table rows and output options layered over the built-in tables.
///
/// Table keys are pixel values (`"10px"`); spacing values are the step suffix only
/// (`"2.5"` becomes `p-2.5` / `m-2.5`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    pub arbitrary_values: ArbitraryValues,
    pub font_sizes: BTreeMap<String, String>,
    pub spacing: BTreeMap<String, String>,
    pub radii: BTreeMap<String, String>,
    pub shadow_tints: Vec<TintRule>,
    pub border_tints: Vec<TintRule>,
}

impl CompilerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// True when no table rows are added, so the built-in tables can be shared as-is.
    pub fn has_table_rows(&self) -> bool {
        !(self.font_sizes.is_empty()
            && self.spacing.is_empty()
            && self.radii.is_empty()
            && self.shadow_tints.is_empty()
            && self.border_tints.is_empty())
    }
}
