//! # Cost of Gain Calculation
//!
//! Looks back at a finished feeding period and prices each pound that was
//! put on.
//!
//! ## Formula
//!
//! ```text
//! total_gain     = final_weight - initial_weight
//! avg_daily_gain = total_gain / days
//! total_cost     = total_feed_cost + yardage_cost + veterinary_cost + other_costs
//! cost_per_pound = total_cost / total_gain   (0 when total_gain <= 0)
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::input::{optional, Requirements};
use crate::present::{ResultLine, ValueFormat};
use crate::units::Pounds;

/// Input snapshot for the cost-of-gain calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostOfGainInput {
    /// Weight going on feed (lbs)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub initial_weight: Option<f64>,

    /// Weight coming off feed (lbs)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub final_weight: Option<f64>,

    /// Days on feed
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub days: Option<f64>,

    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub total_feed_cost: Option<f64>,

    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub yardage_cost: Option<f64>,

    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub veterinary_cost: Option<f64>,

    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub other_costs: Option<f64>,
}

impl CostOfGainInput {
    /// Build from a per-field lookup (field keys as in the field table).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<f64>,
    {
        CostOfGainInput {
            initial_weight: lookup("initial_weight"),
            final_weight: lookup("final_weight"),
            days: lookup("days"),
            total_feed_cost: lookup("total_feed_cost"),
            yardage_cost: lookup("yardage_cost"),
            veterinary_cost: lookup("veterinary_cost"),
            other_costs: lookup("other_costs"),
        }
    }
}

/// Results of the cost-of-gain calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostOfGainResult {
    /// Pounds gained over the period
    pub total_gain: f64,

    /// Pounds gained per day
    pub avg_daily_gain: f64,

    /// Sum of all cost components ($)
    pub total_cost: f64,

    /// Dollars per pound of gain, zero when there was no gain
    pub cost_per_pound: f64,
}

impl CostOfGainResult {
    /// Labeled lines, headline last
    pub fn lines(&self) -> Vec<ResultLine> {
        vec![
            ResultLine::new("Total Gain", self.total_gain, ValueFormat::Pounds(Some(1))),
            ResultLine::new("Avg Daily Gain", self.avg_daily_gain, ValueFormat::PoundsPerDay),
            ResultLine::new("Total Cost", self.total_cost, ValueFormat::Dollars),
            ResultLine::headline(
                "Cost Per Pound of Gain",
                self.cost_per_pound,
                ValueFormat::DollarsPer("lb"),
            ),
        ]
    }
}

/// Calculate cost of gain.
///
/// Initial weight, final weight and days on feed are required; the cost
/// components default to zero.
pub fn calculate(input: &CostOfGainInput) -> CalcResult<CostOfGainResult> {
    let mut req = Requirements::new("CostOfGain");
    let initial_weight = Pounds(req.require("initial_weight", input.initial_weight));
    let final_weight = Pounds(req.require("final_weight", input.final_weight));
    let days = req.require("days", input.days);
    req.finish()?;

    let total_gain = (final_weight - initial_weight).value();
    let avg_daily_gain = total_gain / days;
    let total_cost = optional(input.total_feed_cost)
        + optional(input.yardage_cost)
        + optional(input.veterinary_cost)
        + optional(input.other_costs);

    let cost_per_pound = if total_gain > 0.0 {
        total_cost / total_gain
    } else {
        0.0
    };

    Ok(CostOfGainResult {
        total_gain,
        avg_daily_gain,
        total_cost,
        cost_per_pound,
    })
}
