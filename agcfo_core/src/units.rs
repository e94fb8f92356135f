//! # Unit Types
//!
//! Lightweight newtype wrappers for feed weights and ration prices, which
//! are quoted per pound and per short ton. JSON serialization stays clean
//! (just numbers) and conversions are explicit `From` impls.
//!
//! ## Example
//!
//! ```rust
//! use agcfo_core::units::{DollarsPerLb, DollarsPerTon, Pounds};
//!
//! let ration = DollarsPerTon(280.0);
//! let per_lb: DollarsPerLb = ration.into();
//! assert_eq!(per_lb.0, 0.14);
//! assert_eq!(per_lb.cost_of(Pounds(100.0)), 14.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Pounds in one short ton
pub const LBS_PER_TON: f64 = 2000.0;

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Price in dollars per pound
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DollarsPerLb(pub f64);

/// Price in dollars per short ton
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DollarsPerTon(pub f64);

impl From<DollarsPerTon> for DollarsPerLb {
    fn from(p: DollarsPerTon) -> Self {
        DollarsPerLb(p.0 / LBS_PER_TON)
    }
}

impl DollarsPerLb {
    /// Dollar cost of a weight at this price
    pub fn cost_of(self, weight: Pounds) -> f64 {
        self.0 * weight.0
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Pounds);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ton_price_to_pound_price() {
        let per_lb: DollarsPerLb = DollarsPerTon(280.0).into();
        assert!((per_lb.0 - 0.14).abs() < 1e-12);
        // 600 lb of gain at 6.5 lb feed per lb gain
        let feed = Pounds(600.0) * 6.5;
        assert!((per_lb.cost_of(feed) - 546.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Pounds(1350.0);
        let b = Pounds(750.0);
        assert_eq!((a - b).0, 600.0);
        assert_eq!((a + b).value(), 2100.0);
        assert_eq!((b / 2.0).0, 375.0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Pounds(1.5)).unwrap();
        assert_eq!(json, "1.5");
    }
}
