mod cli;
mod error;
mod report;
mod sender;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use advisor_core::{
    AdvisorError, AlphaVantageClient, HttpClient, Pipeline, ReqwestHttpClient, StaticHttpClient,
    Symbol, SAMPLE_DAILY_PAYLOAD,
};

use crate::cli::Cli;
use crate::error::CliError;
use crate::sender::LogSender;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let requested_at = OffsetDateTime::now_utc();

    let symbol = Symbol::parse(&cli.symbol).map_err(AdvisorError::from)?;

    let http_client: Arc<dyn HttpClient> = if cli.offline {
        Arc::new(StaticHttpClient::ok(SAMPLE_DAILY_PAYLOAD))
    } else {
        Arc::new(ReqwestHttpClient::new())
    };

    let client = match cli.api_key {
        Some(api_key) => AlphaVantageClient::new(http_client, api_key),
        None => AlphaVantageClient::from_env(http_client),
    };

    let pipeline = Pipeline::new(client, Arc::new(LogSender));
    let run_report = pipeline.run(&symbol, &cli.output, !cli.no_alerts).await?;

    report::render(&run_report, requested_at);
    Ok(())
}
