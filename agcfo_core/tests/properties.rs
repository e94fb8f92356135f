//! Property-based tests for the calculators.

use proptest::prelude::*;

use agcfo_core::calculations::{
    cost_of_gain, feedlot, pasture, CostOfGainInput, FeedlotInput, PastureInput,
};
use agcfo_core::{CalculatorKind, Worksheet};

fn nonzero(lo: f64, hi: f64) -> impl Strategy<Value = f64> {
    (lo..hi).prop_filter("non-zero", |v: &f64| *v != 0.0)
}

fn feedlot_input() -> impl Strategy<Value = FeedlotInput> {
    (
        nonzero(1.0, 400.0),
        nonzero(200.0, 1000.0),
        nonzero(600.0, 1800.0),
        nonzero(50.0, 500.0),
        nonzero(3.0, 12.0),
        prop::option::of(0.0..100.0f64),
        prop::option::of(0.0..100.0f64),
    )
        .prop_map(|(price, pw, tw, feed, conv, yardage, other)| FeedlotInput {
            purchase_price: Some(price),
            purchase_weight: Some(pw),
            target_weight: Some(tw),
            feed_cost_per_ton: Some(feed),
            feed_conversion: Some(conv),
            yardage,
            other,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Gain needed is exactly target minus purchase weight.
    #[test]
    fn gain_needed_is_exact(input in feedlot_input()) {
        let result = feedlot::calculate(&input).unwrap();
        let expected = input.target_weight.unwrap() - input.purchase_weight.unwrap();
        prop_assert_eq!(result.gain_needed, expected);
    }

    /// Recomputing the same snapshot gives the same answer.
    #[test]
    fn feedlot_is_idempotent(input in feedlot_input()) {
        prop_assert_eq!(feedlot::calculate(&input), feedlot::calculate(&input.clone()));
    }

    /// Dropping any required field withholds the result entirely.
    #[test]
    fn feedlot_missing_required_has_no_result(input in feedlot_input(), which in 0usize..5) {
        let mut input = input;
        match which {
            0 => input.purchase_price = None,
            1 => input.purchase_weight = None,
            2 => input.target_weight = None,
            3 => input.feed_cost_per_ton = None,
            _ => input.feed_conversion = None,
        }
        prop_assert!(feedlot::calculate(&input).unwrap_err().is_incomplete());
    }

    /// Cost per pound is never negative or infinite when there is no gain.
    #[test]
    fn cost_per_pound_guard(
        initial in 300.0..1500.0f64,
        loss in 0.0..300.0f64,
        days in 1.0..365.0f64,
        feed in 0.0..2000.0f64,
    ) {
        let input = CostOfGainInput {
            initial_weight: Some(initial),
            final_weight: Some(initial - loss).filter(|w| *w != 0.0),
            days: Some(days),
            total_feed_cost: Some(feed),
            ..Default::default()
        };
        if let Ok(result) = cost_of_gain::calculate(&input) {
            prop_assert_eq!(result.cost_per_pound, 0.0);
        }
    }

    /// Pasture totals are consistent with each other.
    #[test]
    fn pasture_totals_consistent(
        acres in 1.0..5000.0f64,
        rent in 1.0..200.0f64,
        capacity in 0.05..3.0f64,
        months in 1.0..12.0f64,
        supplement in 0.0..100.0f64,
    ) {
        let input = PastureInput {
            acres: Some(acres),
            cost_per_acre: Some(rent),
            carrying_capacity: Some(capacity),
            months: Some(months),
            supplemental_feed: Some(supplement),
        };
        let r = pasture::calculate(&input).unwrap();
        let spread = (r.cost_per_head * r.total_head - r.total_pasture_cost).abs();
        prop_assert!(spread < 1e-6 * r.total_pasture_cost);
        prop_assert!((r.total_cost_per_head - r.cost_per_head - supplement).abs() < 1e-9);
    }

    /// Arbitrary text never panics a worksheet.
    #[test]
    fn worksheet_accepts_any_text(text in ".{0,12}", index in 0usize..9) {
        let mut sheet = Worksheet::with_placeholders(CalculatorKind::Feedlot);
        sheet.set_index(index, text);
        if let Some(result) = sheet.result() {
            prop_assert_eq!(result.kind(), CalculatorKind::Feedlot);
        }
    }
}
