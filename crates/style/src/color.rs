//! Color values as typed into the editor's color pickers.
use serde::{Deserialize, Serialize};
use std::fmt;

const TRANSPARENT: &str = "transparent";

/// A color field: the `transparent` sentinel or a raw color string kept verbatim.
///
/// Conversion from a string never fails; whatever the editor produced is carried through
/// untouched so it can be embedded as an arbitrary value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[derive(Default)]
pub enum ColorValue {
    #[default]
    Transparent,
    Value(String),
}

impl ColorValue {
    pub fn new(raw: impl Into<String>) -> Self {
        Self::from(raw.into())
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, ColorValue::Transparent)
    }

    /// The raw color, or `None` for the transparent sentinel.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ColorValue::Transparent => None,
            ColorValue::Value(raw) => Some(raw),
        }
    }
}

impl From<String> for ColorValue {
    fn from(raw: String) -> Self {
        if raw.trim().eq_ignore_ascii_case(TRANSPARENT) {
            ColorValue::Transparent
        } else {
            ColorValue::Value(raw)
        }
    }
}

impl From<&str> for ColorValue {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ColorValue> for String {
    fn from(color: ColorValue) -> Self {
        match color {
            ColorValue::Transparent => TRANSPARENT.to_string(),
            ColorValue::Value(raw) => raw,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_raw().unwrap_or(TRANSPARENT))
    }
}
