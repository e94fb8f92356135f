//! # Result Presentation
//!
//! Turns calculator results into labeled, rounded display lines. Currency
//! is shown to the cent, weights to the precision the worksheet uses for
//! each figure, head counts as whole numbers.
//!
//! ## Example
//!
//! ```rust
//! use agcfo_core::present::{ResultLine, ValueFormat};
//!
//! let line = ResultLine::new("Total Cost", 831.0, ValueFormat::Dollars);
//! assert_eq!(line.formatted(), "$831.00");
//! ```

use std::fmt;

use serde::Serialize;

/// Educational-use notice shown alongside every calculator.
pub const DISCLAIMER: &str = "These calculators are provided for educational purposes and \
should be used as estimates only. Actual results may vary based on market conditions, individual \
circumstances, and other factors. Always consult with a qualified financial professional for \
specific advice regarding your operation.";

/// How a result value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueFormat {
    /// `$1234.56`
    Dollars,
    /// `$0.62/cwt`
    DollarsPer(&'static str),
    /// `600 lbs`; `None` prints the shortest exact form, `Some(n)` fixes n decimals
    Pounds(Option<usize>),
    /// `3.33 lbs/day`
    PoundsPerDay,
    /// `250 head`
    Head,
}

impl ValueFormat {
    /// Render a value in this format
    pub fn render(&self, value: f64) -> String {
        match self {
            ValueFormat::Dollars => format!("${:.2}", value),
            ValueFormat::DollarsPer(unit) => format!("${:.2}/{}", value, unit),
            ValueFormat::Pounds(None) => format!("{} lbs", value),
            ValueFormat::Pounds(Some(decimals)) => format!("{:.*} lbs", *decimals, value),
            ValueFormat::PoundsPerDay => format!("{:.2} lbs/day", value),
            ValueFormat::Head => format!("{:.0} head", value),
        }
    }
}

/// One labeled result value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultLine {
    pub label: &'static str,
    pub value: f64,
    pub format: ValueFormat,
    /// Headline figure of the calculator
    pub emphasis: bool,
}

impl ResultLine {
    pub fn new(label: &'static str, value: f64, format: ValueFormat) -> Self {
        ResultLine {
            label,
            value,
            format,
            emphasis: false,
        }
    }

    pub fn headline(label: &'static str, value: f64, format: ValueFormat) -> Self {
        ResultLine {
            emphasis: true,
            ..ResultLine::new(label, value, format)
        }
    }

    /// The value rendered with its unit
    pub fn formatted(&self) -> String {
        self.format.render(self.value)
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.formatted())
    }
}

/// Render lines as an aligned text block, one `label  value` row per line.
pub fn render_block(lines: &[ResultLine]) -> String {
    let width = lines.iter().map(|l| l.label.len()).max().unwrap_or(0) + 1;
    lines
        .iter()
        .map(|l| format!("{:<width$} {}", format!("{}:", l.label), l.formatted(), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_rounding() {
        assert_eq!(ValueFormat::Dollars.render(16.666_666), "$16.67");
        assert_eq!(ValueFormat::Dollars.render(25000.0), "$25000.00");
        assert_eq!(ValueFormat::DollarsPer("cwt").render(0.615_555), "$0.62/cwt");
    }

    #[test]
    fn test_weight_precision() {
        assert_eq!(ValueFormat::Pounds(None).render(600.0), "600 lbs");
        assert_eq!(ValueFormat::Pounds(None).render(600.5), "600.5 lbs");
        assert_eq!(ValueFormat::Pounds(Some(1)).render(600.0), "600.0 lbs");
        assert_eq!(ValueFormat::PoundsPerDay.render(10.0 / 3.0), "3.33 lbs/day");
        assert_eq!(ValueFormat::Head.render(250.0), "250 head");
    }

    #[test]
    fn test_display_and_headline() {
        let line = ResultLine::headline("Breakeven Price", 0.62, ValueFormat::DollarsPer("cwt"));
        assert!(line.emphasis);
        assert_eq!(line.to_string(), "Breakeven Price: $0.62/cwt");
    }

    #[test]
    fn test_render_block_aligns_values() {
        let block = render_block(&[
            ResultLine::new("Total Cost", 430.0, ValueFormat::Dollars),
            ResultLine::new("Avg Daily Gain", 3.333, ValueFormat::PoundsPerDay),
        ]);
        assert_eq!(block, "Total Cost:     $430.00\nAvg Daily Gain: 3.33 lbs/day");
    }
}
