//! # Feedlot Breakeven Calculation
//!
//! Estimates the sale price a placement has to bring to cover its purchase,
//! the feed needed to reach target weight, and per-head overhead.
//!
//! ## Formula
//!
//! ```text
//! gain_needed     = target_weight - purchase_weight
//! total_feed_cost = gain_needed * feed_conversion * feed_cost_per_ton / 2000
//! total_cost      = purchase_price + total_feed_cost + yardage + interest + death_loss + other
//! breakeven       = total_cost / target_weight
//! ```
//!
//! `purchase_price` is entered in $/cwt but enters `total_cost` as a flat
//! per-head dollar amount. This matches the published worksheet figures;
//! it is not scaled by purchase weight.
//!
//! ## Example
//!
//! ```rust
//! use agcfo_core::calculations::feedlot::{calculate, FeedlotInput};
//!
//! let input = FeedlotInput {
//!     purchase_price: Some(180.0),
//!     purchase_weight: Some(750.0),
//!     target_weight: Some(1350.0),
//!     feed_cost_per_ton: Some(280.0),
//!     feed_conversion: Some(6.5),
//!     ..Default::default()
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.gain_needed, 600.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::input::{optional, Requirements};
use crate::present::{ResultLine, ValueFormat};
use crate::units::{DollarsPerLb, DollarsPerTon, Pounds};

/// Input snapshot for the feedlot breakeven calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "purchase_price": 180.0,
///   "purchase_weight": 750,
///   "target_weight": 1350,
///   "feed_cost_per_ton": "280.00",
///   "feed_conversion": 6.5,
///   "yardage": 45
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedlotInput {
    /// Purchase price ($/cwt), added to total cost as a per-head amount
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub purchase_price: Option<f64>,

    /// Weight at placement (lbs)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub purchase_weight: Option<f64>,

    /// Finished weight (lbs)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub target_weight: Option<f64>,

    /// Ration cost ($/ton)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub feed_cost_per_ton: Option<f64>,

    /// Pounds of feed per pound of gain
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub feed_conversion: Option<f64>,

    /// Yardage ($/head)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub yardage: Option<f64>,

    /// Interest ($/head)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub interest: Option<f64>,

    /// Death loss ($/head)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub death_loss: Option<f64>,

    /// Other costs ($/head)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub other: Option<f64>,
}

impl FeedlotInput {
    /// Build from a per-field lookup (field keys as in the field table).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<f64>,
    {
        FeedlotInput {
            purchase_price: lookup("purchase_price"),
            purchase_weight: lookup("purchase_weight"),
            target_weight: lookup("target_weight"),
            feed_cost_per_ton: lookup("feed_cost_per_ton"),
            feed_conversion: lookup("feed_conversion"),
            yardage: lookup("yardage"),
            interest: lookup("interest"),
            death_loss: lookup("death_loss"),
            other: lookup("other"),
        }
    }
}

/// Results of the feedlot breakeven calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "gain_needed": 600.0,
///   "total_feed_cost": 546.0,
///   "total_cost": 831.0,
///   "breakeven": 0.6155
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedlotResult {
    /// Target minus purchase weight (lbs)
    pub gain_needed: f64,

    /// Cost of the feed to put on that gain ($)
    pub total_feed_cost: f64,

    /// All-in cost per head ($)
    pub total_cost: f64,

    /// Total cost divided by target weight
    pub breakeven: f64,
}

impl FeedlotResult {
    /// Labeled lines, headline last
    pub fn lines(&self) -> Vec<ResultLine> {
        vec![
            ResultLine::new("Gain Needed", self.gain_needed, ValueFormat::Pounds(None)),
            ResultLine::new("Total Feed Cost", self.total_feed_cost, ValueFormat::Dollars),
            ResultLine::new("Total Cost", self.total_cost, ValueFormat::Dollars),
            ResultLine::headline(
                "Breakeven Price",
                self.breakeven,
                ValueFormat::DollarsPer("cwt"),
            ),
        ]
    }
}

/// Calculate the feedlot breakeven.
///
/// # Returns
///
/// * `Ok(FeedlotResult)` - All required fields present
/// * `Err(CalcError::Incomplete)` - Purchase price, weights, feed cost or
///   feed conversion blank or zero
pub fn calculate(input: &FeedlotInput) -> CalcResult<FeedlotResult> {
    let mut req = Requirements::new("Feedlot");
    let purchase_price = req.require("purchase_price", input.purchase_price);
    let purchase_weight = Pounds(req.require("purchase_weight", input.purchase_weight));
    let target_weight = Pounds(req.require("target_weight", input.target_weight));
    let feed_price = DollarsPerTon(req.require("feed_cost_per_ton", input.feed_cost_per_ton));
    let feed_conversion = req.require("feed_conversion", input.feed_conversion);
    req.finish()?;

    let gain_needed = target_weight - purchase_weight;

    // Per-ton ration price applied to pounds of feed
    let feed_needed = gain_needed * feed_conversion;
    let total_feed_cost = DollarsPerLb::from(feed_price).cost_of(feed_needed);

    let total_cost = purchase_price
        + total_feed_cost
        + optional(input.yardage)
        + optional(input.interest)
        + optional(input.death_loss)
        + optional(input.other);

    let breakeven = total_cost / target_weight.value();

    Ok(FeedlotResult {
        gain_needed: gain_needed.value(),
        total_feed_cost,
        total_cost,
        breakeven,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn test_input() -> FeedlotInput {
        FeedlotInput {
            purchase_price: Some(180.0),
            purchase_weight: Some(750.0),
            target_weight: Some(1350.0),
            feed_cost_per_ton: Some(280.0),
            feed_conversion: Some(6.5),
            yardage: Some(45.0),
            interest: Some(25.0),
            death_loss: Some(15.0),
            other: Some(20.0),
        }
    }

    #[test]
    fn test_worked_example() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.gain_needed, 600.0);
        assert!((result.total_feed_cost - 546.0).abs() < 1e-9);
        assert!((result.total_cost - 831.0).abs() < 1e-9);
        // 831 / 1350 = 0.6155...
        assert!((result.breakeven - 0.615_555).abs() < 1e-5);
    }

    #[test]
    fn test_worked_example_lines() {
        let lines = calculate(&test_input()).unwrap().lines();
        let rendered: Vec<String> = lines.iter().map(|l| l.formatted()).collect();
        assert_eq!(rendered, vec!["600 lbs", "$546.00", "$831.00", "$0.62/cwt"]);
        assert!(lines[3].emphasis);
    }

    #[test]
    fn test_optional_costs_default_to_zero() {
        let input = FeedlotInput {
            yardage: None,
            interest: None,
            death_loss: None,
            other: None,
            ..test_input()
        };
        let result = calculate(&input).unwrap();
        assert!((result.total_cost - 726.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_required_field() {
        let input = FeedlotInput {
            feed_conversion: None,
            ..test_input()
        };
        match calculate(&input) {
            Err(CalcError::Incomplete {
                missing,
                calculation_type,
            }) => {
                assert_eq!(calculation_type, "Feedlot");
                assert_eq!(missing, vec!["feed_conversion"]);
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_target_weight_is_missing() {
        let input = FeedlotInput {
            target_weight: Some(0.0),
            ..test_input()
        };
        assert!(calculate(&input).unwrap_err().is_incomplete());
    }

    #[test]
    fn test_empty_input_lists_every_required_field() {
        match calculate(&FeedlotInput::default()) {
            Err(CalcError::Incomplete { missing, .. }) => assert_eq!(missing.len(), 5),
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_weight_loss_gives_negative_gain() {
        let input = FeedlotInput {
            target_weight: Some(700.0),
            ..test_input()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.gain_needed, -50.0);
        assert!(result.total_feed_cost < 0.0);
    }

    #[test]
    fn test_deserialize_with_strings() {
        let json = r#"{
            "purchase_price": "180.00",
            "purchase_weight": 750,
            "target_weight": "1,350",
            "feed_cost_per_ton": "$280",
            "feed_conversion": 6.5,
            "yardage": ""
        }"#;
        let input: FeedlotInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.target_weight, Some(1350.0));
        assert_eq!(input.yardage, None);
        assert!(calculate(&input).is_ok());
    }
}
