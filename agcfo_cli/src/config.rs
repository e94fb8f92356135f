//! Command-line configuration.

use std::path::PathBuf;

use agcfo_core::CalculatorKind;
use clap::{Args, Parser, Subcommand};

/// AgCFO calculators: feedlot breakeven, cost of gain, and pasture cost.
#[derive(Parser, Debug)]
#[command(name = "agcfo", version, about)]
pub struct AppConfig {
    /// Print results as JSON instead of labeled text.
    #[arg(long, global = true, env = "AGCFO_JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl AppConfig {
    /// Parse CLI arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Feedlot breakeven price.
    Feedlot(FeedlotArgs),
    /// Cost per pound of gain on feed.
    Gain(CostOfGainArgs),
    /// Pasture cost per head.
    Pasture(PastureArgs),
    /// Evaluate a JSON scenario document.
    Eval {
        /// Path to a JSON document with a "type" of Feedlot, CostOfGain or Pasture.
        #[arg(short, long)]
        input: PathBuf,
    },
    /// List the input fields of a calculator.
    Fields {
        /// feedlot, gain, or pasture
        calculator: CalculatorKind,
    },
    /// Interactive worksheet that recalculates as you type.
    Tui {
        /// Start with the example values filled in.
        #[arg(long)]
        examples: bool,
    },
}

/// Field flags of a calculator subcommand, as `(field key, raw text)` pairs.
pub trait FieldArgs {
    const KIND: CalculatorKind;

    fn entries(&self) -> Vec<(&'static str, Option<&str>)>;
}

#[derive(Args, Debug)]
pub struct FeedlotArgs {
    /// Purchase price ($/cwt).
    #[arg(long, allow_hyphen_values = true)]
    pub purchase_price: Option<String>,
    /// Purchase weight (lbs).
    #[arg(long, allow_hyphen_values = true)]
    pub purchase_weight: Option<String>,
    /// Target weight (lbs).
    #[arg(long, allow_hyphen_values = true)]
    pub target_weight: Option<String>,
    /// Feed cost ($/ton).
    #[arg(long, allow_hyphen_values = true)]
    pub feed_cost_per_ton: Option<String>,
    /// Feed conversion (lbs feed per lb gain).
    #[arg(long, allow_hyphen_values = true)]
    pub feed_conversion: Option<String>,
    /// Yardage ($/head).
    #[arg(long, allow_hyphen_values = true)]
    pub yardage: Option<String>,
    /// Interest ($/head).
    #[arg(long, allow_hyphen_values = true)]
    pub interest: Option<String>,
    /// Death loss ($/head).
    #[arg(long, allow_hyphen_values = true)]
    pub death_loss: Option<String>,
    /// Other costs ($/head).
    #[arg(long, allow_hyphen_values = true)]
    pub other: Option<String>,
}

impl FieldArgs for FeedlotArgs {
    const KIND: CalculatorKind = CalculatorKind::Feedlot;

    fn entries(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("purchase_price", self.purchase_price.as_deref()),
            ("purchase_weight", self.purchase_weight.as_deref()),
            ("target_weight", self.target_weight.as_deref()),
            ("feed_cost_per_ton", self.feed_cost_per_ton.as_deref()),
            ("feed_conversion", self.feed_conversion.as_deref()),
            ("yardage", self.yardage.as_deref()),
            ("interest", self.interest.as_deref()),
            ("death_loss", self.death_loss.as_deref()),
            ("other", self.other.as_deref()),
        ]
    }
}

#[derive(Args, Debug)]
pub struct CostOfGainArgs {
    /// Initial weight (lbs).
    #[arg(long, allow_hyphen_values = true)]
    pub initial_weight: Option<String>,
    /// Final weight (lbs).
    #[arg(long, allow_hyphen_values = true)]
    pub final_weight: Option<String>,
    /// Days on feed.
    #[arg(long, allow_hyphen_values = true)]
    pub days: Option<String>,
    /// Total feed cost ($).
    #[arg(long, allow_hyphen_values = true)]
    pub total_feed_cost: Option<String>,
    /// Yardage cost ($).
    #[arg(long, allow_hyphen_values = true)]
    pub yardage_cost: Option<String>,
    /// Veterinary cost ($).
    #[arg(long, allow_hyphen_values = true)]
    pub veterinary_cost: Option<String>,
    /// Other costs ($).
    #[arg(long, allow_hyphen_values = true)]
    pub other_costs: Option<String>,
}

impl FieldArgs for CostOfGainArgs {
    const KIND: CalculatorKind = CalculatorKind::CostOfGain;

    fn entries(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("initial_weight", self.initial_weight.as_deref()),
            ("final_weight", self.final_weight.as_deref()),
            ("days", self.days.as_deref()),
            ("total_feed_cost", self.total_feed_cost.as_deref()),
            ("yardage_cost", self.yardage_cost.as_deref()),
            ("veterinary_cost", self.veterinary_cost.as_deref()),
            ("other_costs", self.other_costs.as_deref()),
        ]
    }
}

#[derive(Args, Debug)]
pub struct PastureArgs {
    /// Total acres.
    #[arg(long, allow_hyphen_values = true)]
    pub acres: Option<String>,
    /// Cost per acre ($/acre/year).
    #[arg(long, allow_hyphen_values = true)]
    pub cost_per_acre: Option<String>,
    /// Carrying capacity (head/acre).
    #[arg(long, allow_hyphen_values = true)]
    pub carrying_capacity: Option<String>,
    /// Grazing months.
    #[arg(long, allow_hyphen_values = true)]
    pub months: Option<String>,
    /// Supplemental feed ($/head).
    #[arg(long, allow_hyphen_values = true)]
    pub supplemental_feed: Option<String>,
}

impl FieldArgs for PastureArgs {
    const KIND: CalculatorKind = CalculatorKind::Pasture;

    fn entries(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("acres", self.acres.as_deref()),
            ("cost_per_acre", self.cost_per_acre.as_deref()),
            ("carrying_capacity", self.carrying_capacity.as_deref()),
            ("months", self.months.as_deref()),
            ("supplemental_feed", self.supplemental_feed.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn flag_names_match_field_table() {
        let cmd = AppConfig::command();
        for kind in CalculatorKind::ALL {
            let sub = cmd
                .find_subcommand(kind.short_name())
                .expect("subcommand per calculator");
            for field in kind.fields() {
                let flag = field.flag();
                assert!(
                    sub.get_arguments().any(|a| a.get_long() == Some(flag.as_str())),
                    "missing --{} on {}",
                    flag,
                    kind.short_name()
                );
            }
        }
    }

    #[test]
    fn parses_negative_values() {
        let config = AppConfig::try_parse_from([
            "agcfo",
            "gain",
            "--initial-weight",
            "750",
            "--final-weight",
            "-5",
            "--days",
            "10",
        ])
        .unwrap();
        match config.command {
            Command::Gain(args) => assert_eq!(args.final_weight.as_deref(), Some("-5")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_calculator_name() {
        let config = AppConfig::try_parse_from(["agcfo", "fields", "pasture"]).unwrap();
        assert!(matches!(
            config.command,
            Command::Fields { calculator: CalculatorKind::Pasture }
        ));
    }

    #[test]
    fn entries_cover_every_field() {
        let args = PastureArgs {
            acres: Some("500".into()),
            cost_per_acre: None,
            carrying_capacity: None,
            months: None,
            supplemental_feed: None,
        };
        let keys: Vec<_> = args.entries().into_iter().map(|(k, _)| k).collect();
        let expected: Vec<_> = PastureArgs::KIND.fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, expected);
    }
}
