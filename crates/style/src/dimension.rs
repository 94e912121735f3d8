//! Defines primitives for size and spacing.
use crate::parsers::{self, StyleParseError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    #[default]
    Px,
    Rem,
    Em,
    Percent,
    /// A bare number, as in `margin: 0`.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self { value, unit: LengthUnit::Px }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

/// One side of a padding or margin shorthand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeValue {
    Length(Length),
    Auto,
}

impl EdgeValue {
    pub fn is_auto(&self) -> bool {
        matches!(self, EdgeValue::Auto)
    }
}

/// A padding or margin shorthand expanded to its four sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxEdges {
    pub top: EdgeValue,
    pub right: EdgeValue,
    pub bottom: EdgeValue,
    pub left: EdgeValue,
}

impl BoxEdges {
    pub fn all(value: EdgeValue) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn has_auto(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .any(EdgeValue::is_auto)
    }

    /// Auto on both horizontal sides, which is how the editor centers a block.
    pub fn is_horizontally_centered(&self) -> bool {
        self.left.is_auto() && self.right.is_auto()
    }
}

/// A padding or margin spec exactly as the editor wrote it, e.g. `"8px 16px"`.
///
/// The raw text is the source of truth. `edges()` gives a structured view but the
/// compiler only ever re-emits the original string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxSpec(String);

impl BoxSpec {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated slots of the shorthand.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// Whether `auto` appears anywhere in the spec.
    pub fn has_auto(&self) -> bool {
        self.0.contains("auto")
    }

    /// The only slot, when the spec has exactly one.
    pub fn single_value(&self) -> Option<&str> {
        let mut values = self.values();
        match (values.next(), values.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// True for a single slot that parses as a zero length (`0`, `0px`, `0rem` ...).
    pub fn is_zero(&self) -> bool {
        self.single_value()
            .and_then(|v| parsers::run_parser(parsers::parse_length, v).ok())
            .is_some_and(|len| len.is_zero())
    }

    /// Expands the CSS shorthand (1 to 4 values) into four sides.
    pub fn edges(&self) -> Result<BoxEdges, StyleParseError> {
        parsers::parse_box_edges(&self.0)
    }
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self::new("0px")
    }
}

impl From<&str> for BoxSpec {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for BoxSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A width or height field.
///
/// Every variant except `Auto` and `Full` keeps the raw text for arbitrary-value output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[derive(Default)]
pub enum SizeValue {
    #[default]
    Auto,
    /// `100%`
    Full,
    /// `<number><unit>`, e.g. `320px` or `50%`.
    Length(String),
    /// `calc(...)`
    Calc(String),
    /// Anything the editor let through that is neither of the above.
    Other(String),
}

impl SizeValue {
    pub fn new(raw: impl Into<String>) -> Self {
        Self::from(raw.into())
    }

    /// The raw text for variants that carry one.
    pub fn raw(&self) -> Option<&str> {
        match self {
            SizeValue::Auto | SizeValue::Full => None,
            SizeValue::Length(raw) | SizeValue::Calc(raw) | SizeValue::Other(raw) => Some(raw),
        }
    }
}

impl From<String> for SizeValue {
    fn from(raw: String) -> Self {
        parsers::classify_size(raw)
    }
}

impl From<&str> for SizeValue {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<SizeValue> for String {
    fn from(size: SizeValue) -> Self {
        match size {
            SizeValue::Auto => "auto".to_string(),
            SizeValue::Full => "100%".to_string(),
            SizeValue::Length(raw) | SizeValue::Calc(raw) | SizeValue::Other(raw) => raw,
        }
    }
}
