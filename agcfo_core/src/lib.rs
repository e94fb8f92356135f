//! # agcfo_core - Livestock Financial Calculators
//!
//! `agcfo_core` holds the arithmetic behind the MyAgCFO tools page: feedlot
//! breakeven, cost of gain, and pasture cost per head. All inputs and
//! outputs are JSON-serializable so the same engine can sit behind a
//! terminal, a web form, or a script.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from an input snapshot to a result
//! - **Absent, not zero**: A blank required field means no result at all
//! - **Lenient input**: Free-form text is coerced, never rejected
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use agcfo_core::calculations::CalculatorKind;
//! use agcfo_core::worksheet::Worksheet;
//!
//! let sheet = Worksheet::with_placeholders(CalculatorKind::CostOfGain);
//! for line in sheet.result().unwrap().lines() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The three calculators and their field tables
//! - [`worksheet`] - Recompute-on-edit form state
//! - [`input`] - Text-to-number coercion
//! - [`present`] - Labels, units and rounding for display
//! - [`units`] - Weight and price unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod input;
pub mod present;
pub mod units;
pub mod worksheet;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput, CalculatorKind};
pub use errors::{CalcError, CalcResult};
pub use worksheet::Worksheet;
