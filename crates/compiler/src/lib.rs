//! Compiles editor style records into utility class tokens.
//!
//! ```
//! use classwright_compiler::compile;
//! use classwright_style::StyleRecord;
//!
//! let mut style = StyleRecord::default();
//! style.font_size_px = 27.0;
//! assert!(compile(&style).starts_with("text-[27px]"));
//! ```

pub mod compiler;
pub mod config;
pub mod tables;
pub mod token;

pub use compiler::Compiler;
pub use config::{ArbitraryValues, CompilerConfig, ConfigError, TintRule};
pub use tables::TokenTables;
pub use token::ClassToken;

use classwright_style::StyleRecord;
use once_cell::sync::Lazy;

static DEFAULT_COMPILER: Lazy<Compiler> = Lazy::new(Compiler::new);

/// Compiles a record with the built-in tables and verbatim arbitrary values.
pub fn compile(style: &StyleRecord) -> String {
    DEFAULT_COMPILER.compile(style)
}
