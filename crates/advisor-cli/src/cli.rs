//! CLI argument definitions for the advisor.
//!
//! One invocation evaluates one symbol: fetch the daily series, print the
//! statistics and recommendation, send a price-movement alert when the
//! day-over-day move crosses the threshold, and export the series to CSV.
//!
//! # Examples
//!
//! ```bash
//! # Evaluate a symbol against the live API (key from ALPHAVANTAGE_API_KEY)
//! advisor MSFT
//!
//! # Write the series somewhere else
//! advisor AAPL --output reports/aapl.csv
//!
//! # Evaluate the bundled sample payload without touching the network
//! advisor MSFT --offline
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Daily stock advisor: fetch, evaluate, alert, export.
#[derive(Debug, Parser)]
#[command(
    name = "advisor",
    author,
    version,
    about = "Daily stock advisor: fetch, evaluate, alert, export",
    long_about = "Fetches the daily price series for one stock symbol, derives recent \
high/low and latest/prior close, renders a buy/hold recommendation, sends a \
best-effort notification when the latest close moved more than 5% day-over-day, \
and writes the full series to a CSV file (overwritten each run)."
)]
pub struct Cli {
    /// Stock symbol to evaluate (1-5 letters, e.g. MSFT).
    pub symbol: String,

    /// Output path for the exported CSV series.
    #[arg(long, default_value = "data/prices.csv")]
    pub output: PathBuf,

    /// Evaluate the bundled sample payload instead of calling the upstream API.
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Skip price-movement notifications even when the threshold is crossed.
    #[arg(long, default_value_t = false)]
    pub no_alerts: bool,

    /// Alpha Vantage API key. Defaults to the ALPHAVANTAGE_API_KEY
    /// environment variable.
    #[arg(long)]
    pub api_key: Option<String>,
}
