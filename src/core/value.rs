use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// One grid cell: numeric when the text parses as a number, otherwise an
/// opaque label kept verbatim.
///
/// Parsing goes through `rust_decimal` first so spreadsheet-style numerics do
/// not pick up binary noise on the way in, with a plain `f64` fallback for
/// magnitudes a decimal cannot hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Label(String),
}

impl CellValue {
    /// Permissive cell parser: any text that is not a finite number becomes a
    /// label, never an error.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Label(text.to_owned());
        }

        let decimal = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));
        if let Ok(value) = decimal {
            if let Some(number) = value.to_f64() {
                if number.is_finite() {
                    return Self::Number(number);
                }
            }
        }

        match f64::from_str(trimmed) {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Label(text.to_owned()),
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Label(_) => None,
        }
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Text shown in a grid cell; numbers use the shortest round-trippable
    /// decimal form.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Label(text) => f.write_str(text),
        }
    }
}
