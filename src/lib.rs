pub mod error;

pub use classwright_compiler::{
    compile, ArbitraryValues, ClassToken, Compiler, CompilerConfig, ConfigError, TintRule,
};
pub use classwright_style::{
    BoxSpec, ColorValue, FontWeight, SizeValue, StyleParseError, StyleRecord, TextAlign,
};
pub use error::CliError;

use std::io::Read;

/// Reads one JSON style record from `reader`.
pub fn read_record<R: Read>(reader: R) -> Result<StyleRecord, CliError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Validates and compiles a record.
///
/// With `strict`, the first validation problem is returned as an error. Otherwise it is
/// logged and the record is compiled anyway, since every record has some output.
pub fn compile_checked(
    compiler: &Compiler,
    record: &StyleRecord,
    strict: bool,
) -> Result<Vec<ClassToken>, CliError> {
    if let Err(e) = record.validate() {
        if strict {
            return Err(e.into());
        }
        log::warn!("{}; compiling anyway", e);
    }
    Ok(compiler.tokens(record))
}
