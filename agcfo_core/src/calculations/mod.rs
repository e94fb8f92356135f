//! # Livestock Financial Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input snapshot, every field `Option<f64>` (JSON-serializable)
//! - `*Result` - Derived metrics (JSON-serializable)
//! - `calculate(&input) -> CalcResult<*Result>` - Pure calculation function
//!
//! A calculation returns `CalcError::Incomplete` instead of a zeroed or
//! partial result when a required field is blank.
//!
//! ## Available Calculations
//!
//! - [`feedlot`] - Feedlot breakeven price
//! - [`cost_of_gain`] - Cost per pound of gain on feed
//! - [`pasture`] - Pasture cost per head

pub mod cost_of_gain;
pub mod feedlot;
pub mod pasture;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::present::ResultLine;

// Re-export commonly used types
pub use cost_of_gain::{CostOfGainInput, CostOfGainResult};
pub use feedlot::{FeedlotInput, FeedlotResult};
pub use pasture::{PastureInput, PastureResult};

/// Describes one input field of a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// snake_case key, used in JSON and as the CLI flag stem
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Unit hint shown next to the label
    pub unit: &'static str,
    /// Example value
    pub placeholder: &'static str,
    /// Whether the result is withheld until this field is filled
    pub required: bool,
}

impl FieldSpec {
    const fn required(
        key: &'static str,
        label: &'static str,
        unit: &'static str,
        placeholder: &'static str,
    ) -> Self {
        FieldSpec {
            key,
            label,
            unit,
            placeholder,
            required: true,
        }
    }

    const fn optional(
        key: &'static str,
        label: &'static str,
        unit: &'static str,
        placeholder: &'static str,
    ) -> Self {
        FieldSpec {
            key,
            label,
            unit,
            placeholder,
            required: false,
        }
    }

    /// CLI flag name for this field (`purchase_price` -> `purchase-price`)
    pub fn flag(&self) -> String {
        self.key.replace('_', "-")
    }
}

const FEEDLOT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("purchase_price", "Purchase Price", "$/cwt", "180.00"),
    FieldSpec::required("purchase_weight", "Purchase Weight", "lbs", "750"),
    FieldSpec::required("target_weight", "Target Weight", "lbs", "1350"),
    FieldSpec::required("feed_cost_per_ton", "Feed Cost", "$/ton", "280.00"),
    FieldSpec::required("feed_conversion", "Feed Conversion", "lbs feed per lb gain", "6.5"),
    FieldSpec::optional("yardage", "Yardage", "$/head", "45.00"),
    FieldSpec::optional("interest", "Interest", "$/head", "25.00"),
    FieldSpec::optional("death_loss", "Death Loss", "$/head", "15.00"),
    FieldSpec::optional("other", "Other Costs", "$/head", "20.00"),
];

const COST_OF_GAIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("initial_weight", "Initial Weight", "lbs", "750"),
    FieldSpec::required("final_weight", "Final Weight", "lbs", "1350"),
    FieldSpec::required("days", "Days on Feed", "days", "180"),
    FieldSpec::optional("total_feed_cost", "Total Feed Cost", "$", "350.00"),
    FieldSpec::optional("yardage_cost", "Yardage Cost", "$", "45.00"),
    FieldSpec::optional("veterinary_cost", "Veterinary Cost", "$", "15.00"),
    FieldSpec::optional("other_costs", "Other Costs", "$", "20.00"),
];

const PASTURE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("acres", "Total Acres", "acres", "500"),
    FieldSpec::required("cost_per_acre", "Cost Per Acre", "$/acre/year", "50.00"),
    FieldSpec::required("carrying_capacity", "Carrying Capacity", "head/acre", "0.5"),
    FieldSpec::required("months", "Grazing Months", "months", "6"),
    FieldSpec::optional("supplemental_feed", "Supplemental Feed", "$/head", "25.00"),
];

/// The three calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    Feedlot,
    CostOfGain,
    Pasture,
}

impl CalculatorKind {
    /// All calculators in display order
    pub const ALL: [CalculatorKind; 3] = [
        CalculatorKind::Feedlot,
        CalculatorKind::CostOfGain,
        CalculatorKind::Pasture,
    ];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorKind::Feedlot => "Feedlot Breakeven",
            CalculatorKind::CostOfGain => "Cost of Gain",
            CalculatorKind::Pasture => "Pasture Cost",
        }
    }

    /// Short command-line name
    pub fn short_name(&self) -> &'static str {
        match self {
            CalculatorKind::Feedlot => "feedlot",
            CalculatorKind::CostOfGain => "gain",
            CalculatorKind::Pasture => "pasture",
        }
    }

    /// Tag used in JSON documents and error reports
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculatorKind::Feedlot => "Feedlot",
            CalculatorKind::CostOfGain => "CostOfGain",
            CalculatorKind::Pasture => "Pasture",
        }
    }

    /// Input fields in form order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            CalculatorKind::Feedlot => FEEDLOT_FIELDS,
            CalculatorKind::CostOfGain => COST_OF_GAIN_FIELDS,
            CalculatorKind::Pasture => PASTURE_FIELDS,
        }
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.key == key)
    }

    /// Build an input snapshot, asking `lookup` for each field's value.
    pub fn build_input<F>(&self, lookup: F) -> CalculationItem
    where
        F: Fn(&str) -> Option<f64>,
    {
        match self {
            CalculatorKind::Feedlot => CalculationItem::Feedlot(FeedlotInput::from_lookup(lookup)),
            CalculatorKind::CostOfGain => {
                CalculationItem::CostOfGain(CostOfGainInput::from_lookup(lookup))
            }
            CalculatorKind::Pasture => CalculationItem::Pasture(PastureInput::from_lookup(lookup)),
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        CalculatorKind::ALL
            .into_iter()
            .find(|k| {
                wanted == k.short_name()
                    || wanted == k.calc_type().to_ascii_lowercase()
                    || wanted == k.display_name().to_ascii_lowercase().replace(' ', "")
            })
            .ok_or_else(|| CalcError::unknown_calculator(s))
    }
}

/// Any calculator input, tagged with its calculator type.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "Pasture",
///   "acres": 500,
///   "cost_per_acre": "50.00",
///   "carrying_capacity": 0.5,
///   "months": 6
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Feedlot(FeedlotInput),
    CostOfGain(CostOfGainInput),
    Pasture(PastureInput),
}

impl CalculationItem {
    /// Which calculator this input belongs to
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationItem::Feedlot(_) => CalculatorKind::Feedlot,
            CalculationItem::CostOfGain(_) => CalculatorKind::CostOfGain,
            CalculationItem::Pasture(_) => CalculatorKind::Pasture,
        }
    }

    /// Run the matching calculator.
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Feedlot(i) => feedlot::calculate(i).map(CalculationOutput::Feedlot),
            CalculationItem::CostOfGain(i) => {
                cost_of_gain::calculate(i).map(CalculationOutput::CostOfGain)
            }
            CalculationItem::Pasture(i) => pasture::calculate(i).map(CalculationOutput::Pasture),
        }
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Any calculator result, tagged with its calculator type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Feedlot(FeedlotResult),
    CostOfGain(CostOfGainResult),
    Pasture(PastureResult),
}

impl CalculationOutput {
    /// Which calculator produced this result
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationOutput::Feedlot(_) => CalculatorKind::Feedlot,
            CalculationOutput::CostOfGain(_) => CalculatorKind::CostOfGain,
            CalculationOutput::Pasture(_) => CalculatorKind::Pasture,
        }
    }

    /// Labeled, formatted lines for display
    pub fn lines(&self) -> Vec<ResultLine> {
        match self {
            CalculationOutput::Feedlot(r) => r.lines(),
            CalculationOutput::CostOfGain(r) => r.lines(),
            CalculationOutput::Pasture(r) => r.lines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tables() {
        assert_eq!(CalculatorKind::Feedlot.fields().len(), 9);
        assert_eq!(CalculatorKind::CostOfGain.fields().len(), 7);
        assert_eq!(CalculatorKind::Pasture.fields().len(), 5);

        let required: Vec<_> = CalculatorKind::Pasture
            .fields()
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key)
            .collect();
        assert_eq!(required, vec!["acres", "cost_per_acre", "carrying_capacity", "months"]);
    }

    #[test]
    fn test_field_lookup_and_flag() {
        let spec = CalculatorKind::Feedlot.field("feed_cost_per_ton").unwrap();
        assert_eq!(spec.flag(), "feed-cost-per-ton");
        assert_eq!(spec.unit, "$/ton");
        assert!(CalculatorKind::Feedlot.field("acres").is_none());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("feedlot".parse::<CalculatorKind>().unwrap(), CalculatorKind::Feedlot);
        assert_eq!("gain".parse::<CalculatorKind>().unwrap(), CalculatorKind::CostOfGain);
        assert_eq!("cost-of-gain".parse::<CalculatorKind>().unwrap(), CalculatorKind::CostOfGain);
        assert_eq!("Pasture Cost".parse::<CalculatorKind>().unwrap(), CalculatorKind::Pasture);
    }

    #[test]
    fn test_unknown_calculator_name() {
        let err = "dairy".parse::<CalculatorKind>().unwrap_err();
        assert_eq!(err, CalcError::unknown_calculator("dairy"));
        assert_eq!(err.to_string(), "Unknown calculator: dairy");
    }

    #[test]
    fn test_item_json_dispatch() {
        let json = r#"{
            "type": "Pasture",
            "acres": 500,
            "cost_per_acre": "50.00",
            "carrying_capacity": 0.5,
            "months": 6
        }"#;
        let item = CalculationItem::from_json(json).unwrap();
        assert_eq!(item.kind(), CalculatorKind::Pasture);

        let output = item.calculate().unwrap();
        assert_eq!(output.kind(), CalculatorKind::Pasture);
        match output {
            CalculationOutput::Pasture(r) => assert_eq!(r.total_head, 250.0),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_build_input_from_lookup() {
        let item = CalculatorKind::CostOfGain.build_input(|key| match key {
            "initial_weight" => Some(750.0),
            "final_weight" => Some(1350.0),
            "days" => Some(180.0),
            _ => None,
        });
        let output = item.calculate().unwrap();
        assert_eq!(output.lines().len(), 4);
    }

    #[test]
    fn test_document_with_non_numeric_values() {
        let json = r#"{
            "type": "CostOfGain",
            "initial_weight": 600,
            "final_weight": 900,
            "days": 100,
            "yardage_cost": true,
            "other_costs": {"note": "n/a"}
        }"#;
        let item = CalculationItem::from_json(json).unwrap();
        match item.calculate().unwrap() {
            CalculationOutput::CostOfGain(r) => assert_eq!(r.total_cost, 0.0),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err = CalculationItem::from_json(r#"{"type": "Dairy"}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
