//! # Advisor Core
//!
//! Core pipeline for the daily stock advisor: fetch a daily price series,
//! derive descriptive statistics, apply the buy/hold and price-movement
//! rules, and persist the series to CSV.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`alert`] | Day-over-day price-movement alert rule |
//! | [`alphavantage`] | Upstream daily time-series client |
//! | [`currency`] | USD display formatting |
//! | [`domain`] | Domain models (Symbol, DailyPrice, PriceSeries, ...) |
//! | [`error`] | Error taxonomy |
//! | [`export`] | CSV persistence |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`notify`] | Alert content and the notification sender seam |
//! | [`pipeline`] | Thin orchestration of one run |
//! | [`recommend`] | Buy/hold threshold rule |
//! | [`stats`] | Statistics over a price series |
//! | [`transform`] | Raw payload to typed series |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use advisor_core::{
//!     AlphaVantageClient, NoopSender, Pipeline, ReqwestHttpClient, Symbol,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlphaVantageClient::from_env(Arc::new(ReqwestHttpClient::new()));
//!     let pipeline = Pipeline::new(client, Arc::new(NoopSender));
//!
//!     let symbol = Symbol::parse("MSFT")?;
//!     let report = pipeline.run(&symbol, "data/prices.csv".as_ref(), true).await?;
//!     println!("{:?} — {}", report.recommendation.action, report.recommendation.reason);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`AdvisorError`]. Upstream and schema
//! failures are fatal and abort before anything is written; notification
//! delivery failures are recovered locally so the CSV write and final
//! report always happen. API keys are read from the environment and never
//! logged.

pub mod alert;
pub mod alphavantage;
pub mod currency;
pub mod domain;
pub mod error;
pub mod export;
pub mod http_client;
pub mod notify;
pub mod pipeline;
pub mod recommend;
pub mod stats;
pub mod transform;

// Re-export commonly used types at crate root for convenience

pub use alert::{decide_alert, ALERT_THRESHOLD};
pub use alphavantage::{
    AlphaVantageClient, DailySeriesResponse, API_KEY_ENV, SAMPLE_DAILY_PAYLOAD,
};
pub use currency::to_usd;
pub use domain::{
    AlertDecision, AlertDirection, DailyPrice, PriceSeries, Recommendation, RecommendationAction,
    Statistics, Symbol, TradingDate,
};
pub use error::{AdvisorError, ValidationError};
pub use export::{write_to_csv, CSV_HEADERS};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};
pub use notify::{AlertMessage, DeliveryReceipt, NoopSender, NotificationSender};
pub use pipeline::{Pipeline, RunReport};
pub use recommend::{recommend, BUY_MARGIN};
pub use stats::compute;
pub use transform::transform;
