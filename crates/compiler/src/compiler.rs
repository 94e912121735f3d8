//! Translates a `StyleRecord` into utility class tokens, one property at a time.

use crate::config::{ArbitraryValues, CompilerConfig, ConfigError};
use crate::tables::{
    font_weight_token, normalize_px, px_key, TokenTables, BORDER_TOKEN, CENTER_TOKEN,
    DEFAULT_TABLES, SHADOW_TOKEN,
};
use crate::token::{self, ClassToken};
use classwright_style::{BoxSpec, ColorValue, FontWeight, SizeValue, StyleRecord, TextAlign};
use std::borrow::Cow;

/// Style-to-utility-class compiler.
///
/// Compilation is total: every record produces a token list, with off-table values
/// written as arbitrary-value tokens. A `Compiler` holds only immutable data and can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct Compiler {
    tables: Cow<'static, TokenTables>,
    arbitrary: ArbitraryValues,
}

impl Default for Compiler {
    fn default() -> Self {
        Self {
            tables: Cow::Borrowed(&*DEFAULT_TABLES),
            arbitrary: ArbitraryValues::default(),
        }
    }
}

impl Compiler {
    /// A compiler over the built-in tables.
    pub fn new() -> Self {
        Default::default()
    }

    /// A compiler over the built-in tables plus the config's rows.
    pub fn with_config(config: &CompilerConfig) -> Result<Self, ConfigError> {
        let tables = if config.has_table_rows() {
            Cow::Owned(TokenTables::with_config(config)?)
        } else {
            Cow::Borrowed(&*DEFAULT_TABLES)
        };
        Ok(Self {
            tables,
            arbitrary: config.arbitrary_values,
        })
    }

    pub fn with_arbitrary_values(mut self, mode: ArbitraryValues) -> Self {
        self.arbitrary = mode;
        self
    }

    /// Compiles a record into a space-separated class string.
    pub fn compile(&self, style: &StyleRecord) -> String {
        token::join(&self.tokens(style))
    }

    /// Compiles a record into its ordered token list.
    ///
    /// Order: font size, font weight, text align, text color, background color, padding,
    /// margin, border radius, width, height, box shadow, border.
    pub fn tokens(&self, style: &StyleRecord) -> Vec<ClassToken> {
        let mut out = Vec::with_capacity(14);

        self.font_size(style.font_size_px, &mut out);
        self.font_weight(style.font_weight, &mut out);
        self.text_align(style.text_align, &mut out);
        self.color("text", &style.text_color, &mut out);
        self.color("bg", &style.background_color, &mut out);
        self.padding(&style.padding_spec, &mut out);
        self.margin(&style.margin_spec, &mut out);
        self.border_radius(style.border_radius_px, &mut out);
        self.size("w", &style.width, &mut out);
        self.size("h", &style.height, &mut out);
        self.box_shadow(style.box_shadow.as_deref(), &mut out);
        self.border(style.border.as_deref(), &mut out);

        log::debug!("compiled {} tokens", out.len());
        out
    }

    fn arbitrary(&self, prefix: &str, raw: &str) -> ClassToken {
        ClassToken::arbitrary(prefix, raw, self.arbitrary)
    }

    /// Appends one step's token.
    fn emit(&self, step: &str, token: ClassToken, out: &mut Vec<ClassToken>) {
        if token.is_arbitrary() {
            log::trace!("{}: {} (arbitrary)", step, token);
        } else {
            log::trace!("{}: {}", step, token);
        }
        out.push(token);
    }

    fn font_size(&self, px: f64, out: &mut Vec<ClassToken>) {
        let key = px_key(px);
        let token = match self.tables.font_size(&key) {
            Some(keyword) => ClassToken::keyword(keyword),
            None => {
                log::debug!("font-size {} not in table, using arbitrary value", key);
                self.arbitrary("text", &key)
            }
        };
        self.emit("font-size", token, out);
    }

    fn font_weight(&self, weight: FontWeight, out: &mut Vec<ClassToken>) {
        match font_weight_token(weight.numeric_value()) {
            Some(keyword) => self.emit("font-weight", ClassToken::keyword(keyword), out),
            None => log::warn!(
                "font-weight {} has no utility class, skipping",
                weight.numeric_value()
            ),
        }
    }

    fn text_align(&self, align: TextAlign, out: &mut Vec<ClassToken>) {
        let token = ClassToken::keyword(format!("text-{}", align.as_css()));
        self.emit("text-align", token, out);
    }

    fn color(&self, prefix: &str, color: &ColorValue, out: &mut Vec<ClassToken>) {
        match color.as_raw() {
            Some(raw) if !raw.trim().is_empty() => {
                self.emit("color", self.arbitrary(prefix, raw), out)
            }
            _ => {}
        }
    }

    fn padding(&self, spec: &BoxSpec, out: &mut Vec<ClassToken>) {
        self.spacing("p", spec, out);
    }

    fn margin(&self, spec: &BoxSpec, out: &mut Vec<ClassToken>) {
        // Any auto slot is taken to mean horizontal centering.
        if spec.has_auto() {
            self.emit("margin", ClassToken::keyword(CENTER_TOKEN), out);
            return;
        }
        self.spacing("m", spec, out);
    }

    fn spacing(&self, prefix: &str, spec: &BoxSpec, out: &mut Vec<ClassToken>) {
        // A blank spec has no value to carry, same as zero.
        if spec.is_zero() || spec.values().next().is_none() {
            return;
        }
        let step = spec
            .single_value()
            .and_then(normalize_px)
            .and_then(|key| self.tables.spacing(&key));
        let token = match step {
            Some(step) => ClassToken::keyword(format!("{}-{}", prefix, step)),
            None => {
                log::debug!("{} spec '{}' not in table, using arbitrary value", prefix, spec);
                self.arbitrary(prefix, spec.as_str())
            }
        };
        self.emit("spacing", token, out);
    }

    fn border_radius(&self, px: f64, out: &mut Vec<ClassToken>) {
        if px == 0.0 {
            return;
        }
        let key = px_key(px);
        let token = match self.tables.radius(&key) {
            Some(keyword) => ClassToken::keyword(keyword),
            None => {
                log::debug!("border-radius {} not in table, using arbitrary value", key);
                self.arbitrary("rounded", &key)
            }
        };
        self.emit("border-radius", token, out);
    }

    fn size(&self, prefix: &str, size: &SizeValue, out: &mut Vec<ClassToken>) {
        if *size == SizeValue::Full {
            self.emit("size", ClassToken::keyword(format!("{}-full", prefix)), out);
            return;
        }
        match size.raw() {
            Some(raw) if !raw.trim().is_empty() => {
                self.emit("size", self.arbitrary(prefix, raw), out)
            }
            _ => {}
        }
    }

    fn box_shadow(&self, shadow: Option<&str>, out: &mut Vec<ClassToken>) {
        let Some(raw) = shadow else { return };
        self.emit("box-shadow", ClassToken::keyword(SHADOW_TOKEN), out);
        if let Some(tint) = self.tables.shadow_tint(raw) {
            self.emit("box-shadow", ClassToken::keyword(tint), out);
        }
    }

    fn border(&self, border: Option<&str>, out: &mut Vec<ClassToken>) {
        let Some(raw) = border else { return };
        self.emit("border", ClassToken::keyword(BORDER_TOKEN), out);
        if let Some(tint) = self.tables.border_tint(raw) {
            self.emit("border", ClassToken::keyword(tint), out);
        }
    }
}
