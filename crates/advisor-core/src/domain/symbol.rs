use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 5;

/// Normalized ticker symbol: 1 to 5 ASCII letters, uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a symbol to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolLength {
                value: trimmed.to_owned(),
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        if !normalized.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(ValidationError::SymbolNotAlphabetic {
                value: trimmed.to_owned(),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_symbol() {
        let parsed = Symbol::parse(" msft ").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "MSFT");
    }

    #[test]
    fn rejects_digits() {
        let err = Symbol::parse("1234").expect_err("must fail");
        assert!(matches!(err, ValidationError::SymbolNotAlphabetic { .. }));
    }

    #[test]
    fn rejects_too_long() {
        let err = Symbol::parse("GOOGLE").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::SymbolLength { len: 6, max: 5, .. }
        ));
    }

    #[test]
    fn rejects_empty() {
        let err = Symbol::parse("   ").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptySymbol));
    }
}
