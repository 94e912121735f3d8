//! Canonical lookup tables from pixel values to utility keywords.

use crate::config::{CompilerConfig, ConfigError, TintRule};
use classwright_style::parsers::{parse_length, run_parser};
use classwright_style::LengthUnit;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

const FONT_SIZES: &[(&str, &str)] = &[
    ("12px", "text-xs"),
    ("14px", "text-sm"),
    ("16px", "text-base"),
    ("18px", "text-lg"),
    ("20px", "text-xl"),
    ("24px", "text-2xl"),
    ("30px", "text-3xl"),
    ("36px", "text-4xl"),
    ("48px", "text-5xl"),
    ("56px", "text-6xl"),
    ("60px", "text-6xl"),
    ("72px", "text-7xl"),
];

const FONT_WEIGHTS: &[(u16, &str)] = &[
    (300, "font-light"),
    (400, "font-normal"),
    (500, "font-medium"),
    (600, "font-semibold"),
    (700, "font-bold"),
    (800, "font-extrabold"),
];

// Step suffixes shared by `p-` and `m-`.
const SPACING: &[(&str, &str)] = &[
    ("4px", "1"),
    ("8px", "2"),
    ("12px", "3"),
    ("16px", "4"),
    ("20px", "5"),
    ("24px", "6"),
    ("32px", "8"),
    ("40px", "10"),
    ("48px", "12"),
    ("64px", "16"),
];

const RADII: &[(&str, &str)] = &[
    ("2px", "rounded-sm"),
    ("4px", "rounded"),
    ("6px", "rounded-md"),
    ("8px", "rounded-lg"),
    ("12px", "rounded-xl"),
    ("16px", "rounded-2xl"),
    ("24px", "rounded-3xl"),
    ("9999px", "rounded-full"),
];

// Brand colors as they appear in the editor's shadow presets, rgba() and hex forms.
const SHADOW_TINTS: &[(&str, &str)] = &[
    ("99, 102, 241", "shadow-indigo-500/50"),
    ("#6366f1", "shadow-indigo-500/50"),
    ("168, 85, 247", "shadow-purple-500/50"),
    ("#a855f7", "shadow-purple-500/50"),
    ("236, 72, 153", "shadow-pink-500/50"),
    ("#ec4899", "shadow-pink-500/50"),
];

const BORDER_TINTS: &[(&str, &str)] = &[("#e5e7eb", "border-gray-200")];

pub const SHADOW_TOKEN: &str = "shadow-lg";
pub const BORDER_TOKEN: &str = "border";
pub const CENTER_TOKEN: &str = "mx-auto";

/// The built-in tables, shared by every compiler that adds no rows of its own.
pub static DEFAULT_TABLES: Lazy<TokenTables> = Lazy::new(TokenTables::builtin);

/// Formats a pixel count the way table keys are written (`16px`, `13.5px`).
pub fn px_key(value: f64) -> String {
    format!("{}px", value)
}

/// Normalizes a single CSS value to a table key, if it is a pixel length.
pub fn normalize_px(raw: &str) -> Option<String> {
    match run_parser(parse_length, raw) {
        Ok(len) if len.unit == LengthUnit::Px => Some(px_key(len.value)),
        _ => None,
    }
}

/// Maps a font weight to its keyword. Returns `None` for weights outside the table.
pub fn font_weight_token(weight: u16) -> Option<&'static str> {
    FONT_WEIGHTS
        .iter()
        .find(|(w, _)| *w == weight)
        .map(|(_, token)| *token)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenTables {
    font_sizes: HashMap<String, String>,
    spacing: HashMap<String, String>,
    radii: HashMap<String, String>,
    shadow_tints: Vec<TintRule>,
    border_tints: Vec<TintRule>,
}

impl TokenTables {
    fn builtin() -> Self {
        fn to_map(rows: &[(&str, &str)]) -> HashMap<String, String> {
            rows.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        }
        fn to_rules(rows: &[(&str, &str)]) -> Vec<TintRule> {
            rows.iter().map(|(n, t)| TintRule::new(*n, *t)).collect()
        }

        Self {
            font_sizes: to_map(FONT_SIZES),
            spacing: to_map(SPACING),
            radii: to_map(RADII),
            shadow_tints: to_rules(SHADOW_TINTS),
            border_tints: to_rules(BORDER_TINTS),
        }
    }

    /// The built-in tables with the config's rows merged in.
    ///
    /// Map rows override built-in rows with the same key; tint rules are appended, so
    /// built-in rules still win on overlapping needles.
    pub fn with_config(config: &CompilerConfig) -> Result<Self, ConfigError> {
        let mut tables = (*DEFAULT_TABLES).clone();
        merge_rows("fontSizes", &mut tables.font_sizes, &config.font_sizes)?;
        merge_rows("spacing", &mut tables.spacing, &config.spacing)?;
        merge_rows("radii", &mut tables.radii, &config.radii)?;
        append_rules("shadowTints", &mut tables.shadow_tints, &config.shadow_tints)?;
        append_rules("borderTints", &mut tables.border_tints, &config.border_tints)?;
        Ok(tables)
    }

    pub fn font_size(&self, key: &str) -> Option<&str> {
        self.font_sizes.get(key).map(String::as_str)
    }

    pub fn spacing(&self, key: &str) -> Option<&str> {
        self.spacing.get(key).map(String::as_str)
    }

    pub fn radius(&self, key: &str) -> Option<&str> {
        self.radii.get(key).map(String::as_str)
    }

    /// First shadow tint whose needle occurs in `raw`.
    pub fn shadow_tint(&self, raw: &str) -> Option<&str> {
        find_tint(&self.shadow_tints, raw)
    }

    /// First border tint whose needle occurs in `raw`.
    pub fn border_tint(&self, raw: &str) -> Option<&str> {
        find_tint(&self.border_tints, raw)
    }
}

fn find_tint<'a>(rules: &'a [TintRule], raw: &str) -> Option<&'a str> {
    rules
        .iter()
        .find(|rule| raw.contains(rule.needle.as_str()))
        .map(|rule| rule.token.as_str())
}

fn check_token(table: &'static str, entry: &str, token: &str) -> Result<(), ConfigError> {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidRule {
            table,
            entry: entry.to_string(),
            reason: format!("'{}' is not a single class token", token),
        });
    }
    Ok(())
}

fn merge_rows(
    table: &'static str,
    rows: &mut HashMap<String, String>,
    extra: &BTreeMap<String, String>,
) -> Result<(), ConfigError> {
    for (key, token) in extra {
        let normalized = normalize_px(key).ok_or_else(|| ConfigError::InvalidRule {
            table,
            entry: key.clone(),
            reason: "key must be a pixel length such as '10px'".to_string(),
        })?;
        check_token(table, key, token)?;
        log::debug!("{}: adding row {} -> {}", table, normalized, token);
        rows.insert(normalized, token.clone());
    }
    Ok(())
}

fn append_rules(
    table: &'static str,
    rules: &mut Vec<TintRule>,
    extra: &[TintRule],
) -> Result<(), ConfigError> {
    for rule in extra {
        if rule.needle.is_empty() {
            return Err(ConfigError::InvalidRule {
                table,
                entry: rule.token.clone(),
                reason: "needle must not be empty".to_string(),
            });
        }
        check_token(table, &rule.needle, &rule.token)?;
        rules.push(rule.clone());
    }
    Ok(())
}
