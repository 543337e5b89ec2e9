//! Prints total income per car for the sample trips.

use anyhow::Context;
use clap::Parser;
use std::io;
use taxi_income::config::{AppConfig, LogFormat};
use taxi_income::{demo, telemetry};

/// Per-car taxi income report.
#[derive(Debug, Parser)]
#[command(name = "taxi-income", version, about)]
struct Cli {
    /// Currency symbol (overrides TAXI_CURRENCY_SYMBOL).
    #[arg(long)]
    symbol: Option<String>,

    /// Fractional digits shown (overrides TAXI_DECIMAL_PLACES).
    #[arg(long)]
    decimal_places: Option<u32>,

    /// Emit logs as JSON.
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(symbol) = self.symbol {
            config.currency_symbol = symbol;
        }
        if let Some(decimal_places) = self.decimal_places {
            config.decimal_places = decimal_places;
        }
        if self.json_logs {
            config.log_format = LogFormat::Json;
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    telemetry::init(&config.log_config()).context("failed to initialize logging")?;
    tracing::debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo::run(&config.currency_format(), &mut out) {
        tracing::error!(error = %e, "income report failed");
        return Err(e).context("income report failed");
    }
    Ok(())
}
