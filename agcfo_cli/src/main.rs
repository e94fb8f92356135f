//! # AgCFO CLI
//!
//! Terminal front end for the livestock financial calculators.
//!
//! ```text
//! agcfo feedlot --purchase-price 180 --purchase-weight 750 --target-weight 1350 \
//!               --feed-cost-per-ton 280 --feed-conversion 6.5
//! agcfo --json pasture --acres 500 --cost-per-acre 50 --carrying-capacity 0.5 --months 6
//! agcfo eval --input scenario.json
//! agcfo tui --examples
//! ```
//!
//! A calculation with a blank required field prints nothing and exits with
//! status 2.

mod app;
mod config;
mod report;
mod tui;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use app::Outcome;
use config::AppConfig;

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries results only
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = AppConfig::parse();
    match app::run(&config)? {
        Outcome::Done => Ok(ExitCode::SUCCESS),
        Outcome::Withheld => Ok(ExitCode::from(2)),
    }
}
