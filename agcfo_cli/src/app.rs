//! Command dispatch.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use agcfo_core::{CalcError, CalcResult, CalculationItem, CalculationOutput, Worksheet};

use crate::config::{AppConfig, Command, FieldArgs};
use crate::report::{fields_report, json_report, text_report};
use crate::tui;

/// What a command produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Output was written
    Done,
    /// Required inputs were missing; nothing was written
    Withheld,
}

/// Run the configured command.
pub fn run(config: &AppConfig) -> Result<Outcome> {
    match &config.command {
        Command::Feedlot(args) => Ok(present(evaluate_args(args), config.json)?),
        Command::Gain(args) => Ok(present(evaluate_args(args), config.json)?),
        Command::Pasture(args) => Ok(present(evaluate_args(args), config.json)?),
        Command::Eval { input } => {
            let item = load_item(input)?;
            info!(
                calculator = item.kind().calc_type(),
                path = %input.display(),
                "evaluating document"
            );
            Ok(present(item.calculate(), config.json)?)
        }
        Command::Fields { calculator } => {
            println!("{}", fields_report(*calculator));
            Ok(Outcome::Done)
        }
        Command::Tui { examples } => {
            tui::run(*examples)?;
            Ok(Outcome::Done)
        }
    }
}

/// Fill a worksheet from subcommand flags and take its result.
pub fn evaluate_args<A: FieldArgs>(args: &A) -> CalcResult<CalculationOutput> {
    let mut sheet = Worksheet::new(A::KIND);
    for (key, text) in args.entries() {
        if let Some(text) = text {
            sheet.set_field(key, text)?;
        }
    }
    sheet.input().calculate()
}

fn load_item(path: &Path) -> CalcResult<CalculationItem> {
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    CalculationItem::from_json(&json)
}

/// Print a result, or print nothing when inputs were incomplete.
fn present(result: CalcResult<CalculationOutput>, json: bool) -> CalcResult<Outcome> {
    match result {
        Ok(output) => {
            if json {
                println!("{}", json_report(&output)?);
            } else {
                println!("{}", text_report(&output));
            }
            Ok(Outcome::Done)
        }
        Err(e) if e.is_incomplete() => {
            debug!(error = %e, "no result");
            Ok(Outcome::Withheld)
        }
        Err(e) => Err(e),
    }
}
