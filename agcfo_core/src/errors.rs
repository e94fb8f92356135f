//! # Error Types
//!
//! Structured error types for agcfo_core. A calculator that cannot run
//! reports exactly which fields it is waiting on, so a front end can decide
//! whether to say anything at all (the worksheet and CLI stay silent).
//!
//! ## Example
//!
//! ```rust
//! use agcfo_core::errors::{CalcError, CalcResult};
//!
//! fn require_days(days: Option<f64>) -> CalcResult<f64> {
//!     days.filter(|d| *d != 0.0)
//!         .ok_or_else(|| CalcError::incomplete("CostOfGain", vec!["days".to_string()]))
//! }
//!
//! assert!(require_days(None).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for agcfo_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// One or more required fields are absent, non-numeric, or zero
    #[error("{calculation_type} is waiting on: {}", .missing.join(", "))]
    Incomplete {
        calculation_type: String,
        missing: Vec<String>,
    },

    /// A field key the calculator does not define
    #[error("Unknown field for {calculation_type}: {field}")]
    UnknownField {
        calculation_type: String,
        field: String,
    },

    /// A calculator name that matches none of the calculators
    #[error("Unknown calculator: {name}")]
    UnknownCalculator { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an Incomplete error
    pub fn incomplete(calculation_type: impl Into<String>, missing: Vec<String>) -> Self {
        CalcError::Incomplete {
            calculation_type: calculation_type.into(),
            missing,
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(calculation_type: impl Into<String>, field: impl Into<String>) -> Self {
        CalcError::UnknownField {
            calculation_type: calculation_type.into(),
            field: field.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the error only means "not yet computable".
    ///
    /// Front ends suppress output for these rather than reporting them.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, CalcError::Incomplete { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Incomplete { .. } => "INCOMPLETE_INPUT",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
