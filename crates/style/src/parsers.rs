//! Low-level nom parser functions for the CSS values found in a style record.
//!
//! The compiler never rejects input, so these parsers serve two purposes: classifying
//! raw strings (zero lengths, `100%`, `calc(...)`) and validating records on request.

use crate::dimension::{BoxEdges, EdgeValue, Length, LengthUnit, SizeValue};
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{char, digit1, multispace1};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

impl StyleParseError {
    pub fn invalid(property: &str, value: impl Into<String>) -> Self {
        StyleParseError::InvalidValue {
            property: property.to_string(),
            value: value.into(),
        }
    }
}

// --- Helper Parsers ---

fn parse_f64(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        value(LengthUnit::Px, tag_no_case("px")),
        value(LengthUnit::Rem, tag_no_case("rem")),
        value(LengthUnit::Em, tag_no_case("em")),
        value(LengthUnit::Percent, char('%')),
    ))
    .parse(input)
}

// --- Length & Box Parsers ---

/// Parses a length with an optional unit (e.g., "16px", "1.5rem", "50%", "0").
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    map((parse_f64, opt(parse_unit)), |(value, unit)| Length {
        value,
        unit: unit.unwrap_or(LengthUnit::None),
    })
    .parse(input)
}

fn parse_edge_value(input: &str) -> IResult<&str, EdgeValue> {
    alt((
        value(EdgeValue::Auto, tag_no_case("auto")),
        map(parse_length, EdgeValue::Length),
    ))
    .parse(input)
}

/// Parses a padding/margin shorthand (1, 2, 3 or 4 values) into its four sides.
pub fn parse_box_edges(input: &str) -> Result<BoxEdges, StyleParseError> {
    let parts = run_parser(separated_list1(multispace1, parse_edge_value), input)?;

    match parts.as_slice() {
        [all] => Ok(BoxEdges::all(*all)),
        [vertical, horizontal] => Ok(BoxEdges {
            top: *vertical,
            right: *horizontal,
            bottom: *vertical,
            left: *horizontal,
        }),
        [top, horizontal, bottom] => Ok(BoxEdges {
            top: *top,
            right: *horizontal,
            bottom: *bottom,
            left: *horizontal,
        }),
        [top, right, bottom, left] => Ok(BoxEdges {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        }),
        _ => Err(StyleParseError::Parse(format!(
            "Invalid number of values for margin/padding shorthand: got {}, expected 1 to 4.",
            parts.len()
        ))),
    }
}

/// Sorts a raw width/height string into a `SizeValue`. Never fails.
pub fn classify_size(raw: String) -> SizeValue {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("auto") {
        return SizeValue::Auto;
    }
    match run_parser(parse_length, trimmed) {
        Ok(Length {
            value,
            unit: LengthUnit::Percent,
        }) if value == 100.0 => SizeValue::Full,
        Ok(_) => SizeValue::Length(raw),
        Err(_) => {
            let lower = trimmed.to_ascii_lowercase();
            if lower.starts_with("calc(") && lower.ends_with(')') {
                SizeValue::Calc(raw)
            } else {
                SizeValue::Other(raw)
            }
        }
    }
}

// --- Color Parsers ---

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Parses a hex color (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`) and returns its digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, &str> {
    preceded(
        char('#'),
        alt((
            take_while_m_n(8, 8, is_hex_digit),
            take_while_m_n(6, 6, is_hex_digit),
            take_while_m_n(4, 4, is_hex_digit),
            take_while_m_n(3, 3, is_hex_digit),
        )),
    )
    .parse(input)
}

/// Helper to run a nom parser over the whole (trimmed) input and convert its result to a
/// `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, P>(mut parser: P, input: &'a str) -> Result<T, StyleParseError>
where
    P: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}
