//! Class tokens and their assembly into a class attribute string.

use crate::config::ArbitraryValues;
use serde::Serialize;
use std::fmt;

/// One utility class, either a canonical keyword (`text-xl`) or an arbitrary-value
/// token embedding a raw CSS value (`text-[27px]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClassToken(String);

impl ClassToken {
    pub fn keyword(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// `<prefix>-[<raw>]`, with whitespace inside the brackets handled per `mode`.
    pub fn arbitrary(prefix: &str, raw: &str, mode: ArbitraryValues) -> Self {
        let value = match mode {
            ArbitraryValues::Verbatim => raw.to_string(),
            ArbitraryValues::Underscored => raw.split_whitespace().collect::<Vec<_>>().join("_"),
        };
        Self(format!("{}-[{}]", prefix, value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_arbitrary(&self) -> bool {
        self.0.contains("-[") && self.0.ends_with(']')
    }
}

impl fmt::Display for ClassToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ClassToken> for String {
    fn from(token: ClassToken) -> Self {
        token.0
    }
}

/// Joins tokens with single spaces, the form a class attribute expects.
pub fn join(tokens: &[ClassToken]) -> String {
    tokens
        .iter()
        .map(ClassToken::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arbitrary_value_modes() {
        let verbatim = ClassToken::arbitrary("m", "0px 0px 16px 0px", ArbitraryValues::Verbatim);
        assert_eq!(verbatim.as_str(), "m-[0px 0px 16px 0px]");
        assert!(verbatim.is_arbitrary());

        let underscored =
            ClassToken::arbitrary("m", "0px  0px 16px 0px", ArbitraryValues::Underscored);
        assert_eq!(underscored.as_str(), "m-[0px_0px_16px_0px]");
    }

    #[test]
    fn join_uses_single_spaces() {
        let tokens = vec![ClassToken::keyword("text-xl"), ClassToken::keyword("font-bold")];
        assert_eq!(join(&tokens), "text-xl font-bold");
        assert_eq!(join(&[]), "");
        assert!(!ClassToken::keyword("w-full").is_arbitrary());
    }
}
