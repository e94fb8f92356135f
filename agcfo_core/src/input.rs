//! # Input Coercion
//!
//! Every calculator field starts life as free-form text typed by a user.
//! This module turns that text into `Option<f64>`: anything that is not a
//! finite number is simply absent. Nothing here ever fails.
//!
//! ## Example
//!
//! ```rust
//! use agcfo_core::input::parse_field;
//!
//! assert_eq!(parse_field(" 1,350 "), Some(1350.0));
//! assert_eq!(parse_field("$45.00"), Some(45.0));
//! assert_eq!(parse_field(""), None);
//! assert_eq!(parse_field("abc"), None);
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::errors::{CalcError, CalcResult};

/// Coerce free-form numeric text to a number.
///
/// Surrounding whitespace, a single leading `$` and `,` group separators are
/// accepted. Empty, non-numeric, NaN and infinite values yield `None`.
pub fn parse_field(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Value of an optional cost field, zero when absent.
pub fn optional(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// JSON field value as it may arrive from a document or form post.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Serde adapter: accept a number, a numeric string, `null`, or nothing.
///
/// Any other JSON value (bool, array, object) is treated as blank.
///
/// Use with `#[serde(default, deserialize_with = "crate::input::lenient")]`.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawField>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawField::Number(n)) if n.is_finite() => Some(n),
        Some(RawField::Number(_)) => None,
        Some(RawField::Text(s)) => parse_field(&s),
        Some(RawField::Other(_)) | None => None,
    })
}

/// Collects the required fields a calculator is still waiting on.
///
/// A required field counts as present only when it is a non-zero number;
/// zero is treated the same as blank, which also keeps the formulas clear
/// of division by zero.
pub(crate) struct Requirements {
    calculation_type: &'static str,
    missing: Vec<String>,
}

impl Requirements {
    pub(crate) fn new(calculation_type: &'static str) -> Self {
        Requirements {
            calculation_type,
            missing: Vec::new(),
        }
    }

    /// Take a required value, recording it as missing if absent or zero.
    pub(crate) fn require(&mut self, field: &'static str, value: Option<f64>) -> f64 {
        match value.filter(|v| *v != 0.0) {
            Some(v) => v,
            None => {
                self.missing.push(field.to_string());
                0.0
            }
        }
    }

    /// Succeed only if every required value was present.
    pub(crate) fn finish(self) -> CalcResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                calculation = self.calculation_type,
                missing = ?self.missing,
                "result withheld"
            );
            Err(CalcError::incomplete(self.calculation_type, self.missing))
        }
    }
}
