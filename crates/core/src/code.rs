//! Canonical product code key.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a product code cannot be formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("product code is empty")]
pub struct InvalidCode;

/// Canonical string form of a product key.
///
/// Codes arrive from files, prompts, and barcode scanners in mixed shapes:
/// `"  A1 "`, `"1001"`, the number `1001`. Normalization happens once, here,
/// so every lookup site compares the same representation: a numeric code and
/// its text form are equal when their trimmed string forms match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// Normalize any displayable value into the canonical code form.
    ///
    /// Fails only on codes that are empty after trimming.
    pub fn parse(code: impl ToString) -> Result<Self, InvalidCode> {
        let code = code.to_string();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(InvalidCode);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the placeholder code backfilled from legacy rows that lack
    /// a `code` column. Such rows load but can never match a lookup.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductCode {
    type Err = InvalidCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_forms_are_equal() {
        let from_number = ProductCode::parse(1001).unwrap();
        let from_text = ProductCode::parse("1001").unwrap();
        assert_eq!(from_number, from_text);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let code = ProductCode::parse("  A1 ").unwrap();
        assert_eq!(code.as_str(), "A1");
    }

    #[test]
    fn empty_code_is_rejected() {
        assert_eq!(ProductCode::parse("   "), Err(InvalidCode));
        assert_eq!(ProductCode::parse(""), Err(InvalidCode));
    }

    #[test]
    fn display_round_trips() {
        let code = ProductCode::parse("A1").unwrap();
        assert_eq!(ProductCode::parse(code.to_string()).unwrap(), code);
    }
}
