//! # Pasture Cost Calculation
//!
//! Spreads an annual pasture rent across the head the ground can carry and
//! the months they graze.
//!
//! ## Formula
//!
//! ```text
//! total_pasture_cost      = acres * cost_per_acre
//! total_head              = acres * carrying_capacity
//! cost_per_head           = total_pasture_cost / total_head
//! cost_per_head_per_month = cost_per_head / months
//! total_cost_per_head     = cost_per_head + supplemental_feed
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::input::{optional, Requirements};
use crate::present::{ResultLine, ValueFormat};

/// Input snapshot for the pasture cost calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PastureInput {
    /// Total acres
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub acres: Option<f64>,

    /// Rent ($/acre/year)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub cost_per_acre: Option<f64>,

    /// Stocking rate (head/acre)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub carrying_capacity: Option<f64>,

    /// Grazing season length (months)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub months: Option<f64>,

    /// Supplemental feed ($/head)
    #[serde(default, deserialize_with = "crate::input::lenient")]
    pub supplemental_feed: Option<f64>,
}

impl PastureInput {
    /// Build from a per-field lookup (field keys as in the field table).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<f64>,
    {
        PastureInput {
            acres: lookup("acres"),
            cost_per_acre: lookup("cost_per_acre"),
            carrying_capacity: lookup("carrying_capacity"),
            months: lookup("months"),
            supplemental_feed: lookup("supplemental_feed"),
        }
    }
}

/// Results of the pasture cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastureResult {
    pub total_pasture_cost: f64,
    pub total_head: f64,
    pub cost_per_head: f64,
    pub cost_per_head_per_month: f64,
    /// Pasture plus supplemental feed, per head
    pub total_cost_per_head: f64,
}

impl PastureResult {
    /// Labeled lines, headline last
    pub fn lines(&self) -> Vec<ResultLine> {
        vec![
            ResultLine::new("Total Pasture Cost", self.total_pasture_cost, ValueFormat::Dollars),
            ResultLine::new("Total Head Capacity", self.total_head, ValueFormat::Head),
            ResultLine::new("Pasture Cost Per Head", self.cost_per_head, ValueFormat::Dollars),
            ResultLine::new(
                "Cost Per Head Per Month",
                self.cost_per_head_per_month,
                ValueFormat::Dollars,
            ),
            ResultLine::headline(
                "Total Cost Per Head",
                self.total_cost_per_head,
                ValueFormat::Dollars,
            ),
        ]
    }
}

/// Calculate pasture cost per head.
///
/// Acres, cost per acre, carrying capacity and months must all be non-zero;
/// supplemental feed defaults to zero.
pub fn calculate(input: &PastureInput) -> CalcResult<PastureResult> {
    let mut req = Requirements::new("Pasture");
    let acres = req.require("acres", input.acres);
    let cost_per_acre = req.require("cost_per_acre", input.cost_per_acre);
    let carrying_capacity = req.require("carrying_capacity", input.carrying_capacity);
    let months = req.require("months", input.months);
    req.finish()?;

    let total_pasture_cost = acres * cost_per_acre;
    let total_head = acres * carrying_capacity;
    let cost_per_head = total_pasture_cost / total_head;
    let cost_per_head_per_month = cost_per_head / months;
    let total_cost_per_head = cost_per_head + optional(input.supplemental_feed);

    Ok(PastureResult {
        total_pasture_cost,
        total_head,
        cost_per_head,
        cost_per_head_per_month,
        total_cost_per_head,
    })
}
