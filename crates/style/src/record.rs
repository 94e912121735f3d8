//! The style record edited by the visual editor.

use crate::color::ColorValue;
use crate::dimension::{BoxSpec, SizeValue};
use crate::font::FontWeight;
use crate::parsers::{parse_hex_color, run_parser, StyleParseError};
use crate::text::TextAlign;
use serde::{Deserialize, Serialize};

/// Every visual property the editor exposes for one element.
///
/// The record is rebuilt by the caller on each edit and carries no reference to the
/// element it decorates.
#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    // Font & Text
    pub font_size_px: f64,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
    pub text_color: ColorValue,
    pub background_color: ColorValue,

    // Box Model
    pub padding_spec: BoxSpec,
    pub margin_spec: BoxSpec,
    pub border_radius_px: f64,
    pub width: SizeValue,
    pub height: SizeValue,

    // Effects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

impl Default for StyleRecord {
    /// The editor's starting state: plain 16px black text on nothing.
    fn default() -> Self {
        Self {
            font_size_px: 16.0,
            font_weight: FontWeight::Normal,
            text_align: TextAlign::Left,
            text_color: ColorValue::new("#000000"),
            background_color: ColorValue::Transparent,
            padding_spec: BoxSpec::new("0px"),
            margin_spec: BoxSpec::new("0px"),
            border_radius_px: 0.0,
            width: SizeValue::Auto,
            height: SizeValue::Auto,
            box_shadow: None,
            border: None,
        }
    }
}

impl StyleRecord {
    /// Checks every field against the domain the editor is supposed to produce.
    ///
    /// Compilation never depends on this; it exists for tooling that wants to flag
    /// hand-written records before their odd values show up as arbitrary tokens.
    pub fn validate(&self) -> Result<(), StyleParseError> {
        if !(self.font_size_px.is_finite() && self.font_size_px > 0.0) {
            return Err(StyleParseError::invalid(
                "font-size",
                self.font_size_px.to_string(),
            ));
        }
        if !self.font_weight.is_named() {
            return Err(StyleParseError::invalid(
                "font-weight",
                self.font_weight.numeric_value().to_string(),
            ));
        }
        validate_color("color", &self.text_color)?;
        validate_color("background-color", &self.background_color)?;

        let padding = self.padding_spec.edges()?;
        if padding.has_auto() {
            return Err(StyleParseError::invalid(
                "padding",
                self.padding_spec.as_str(),
            ));
        }
        // The editor only writes auto margins to center a block horizontally.
        let margin = self.margin_spec.edges()?;
        if margin.has_auto() && !margin.is_horizontally_centered() {
            return Err(StyleParseError::invalid("margin", self.margin_spec.as_str()));
        }

        if !(self.border_radius_px.is_finite() && self.border_radius_px >= 0.0) {
            return Err(StyleParseError::invalid(
                "border-radius",
                self.border_radius_px.to_string(),
            ));
        }
        validate_size("width", &self.width)?;
        validate_size("height", &self.height)?;
        Ok(())
    }
}

fn validate_color(property: &str, color: &ColorValue) -> Result<(), StyleParseError> {
    match color.as_raw() {
        None => Ok(()),
        Some(raw) => run_parser(parse_hex_color, raw)
            .map(|_| ())
            .map_err(|_| StyleParseError::invalid(property, raw)),
    }
}

fn validate_size(property: &str, size: &SizeValue) -> Result<(), StyleParseError> {
    match size {
        SizeValue::Other(raw) => Err(StyleParseError::invalid(property, raw.as_str())),
        _ => Ok(()),
    }
}
