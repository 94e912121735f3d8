pub mod fixtures;

use classwright::StyleRecord;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Build a record from the editor's JSON shape.
pub fn record(json: Value) -> Result<StyleRecord, serde_json::Error> {
    serde_json::from_value(json)
}

/// Compile with the default compiler and split back into tokens.
///
/// Only meaningful for records whose arbitrary values contain no spaces.
pub fn tokens_of(style: &StyleRecord) -> Vec<String> {
    classwright::compile(style)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
