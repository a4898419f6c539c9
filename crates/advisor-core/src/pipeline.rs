//! Thin orchestration of one advisor run.
//!
//! Sequences fetch, transform, statistics, decision rules, best-effort
//! notification, and the CSV write. All the logic lives in the pure modules
//! this composes; the pipeline only wires collaborators together and
//! decides which failures abort the run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::alert::decide_alert;
use crate::alphavantage::AlphaVantageClient;
use crate::error::AdvisorError;
use crate::export::write_to_csv;
use crate::notify::{AlertMessage, DeliveryReceipt, NotificationSender};
use crate::recommend::recommend;
use crate::stats::compute;
use crate::{AlertDecision, Recommendation, Statistics, Symbol};

/// Everything one run produced, for rendering the final report.
#[derive(Debug)]
pub struct RunReport {
    pub symbol: Symbol,
    pub statistics: Statistics,
    pub recommendation: Recommendation,
    pub alert: AlertDecision,
    /// `None` when no alert fired or alerts were suppressed; otherwise the
    /// delivery outcome, which may be an error the run recovered from.
    pub notification: Option<Result<DeliveryReceipt, AdvisorError>>,
    pub csv_path: PathBuf,
}

pub struct Pipeline {
    client: AlphaVantageClient,
    sender: Arc<dyn NotificationSender>,
}

impl Pipeline {
    pub fn new(client: AlphaVantageClient, sender: Arc<dyn NotificationSender>) -> Self {
        Self { client, sender }
    }

    /// Run the full pipeline for one symbol.
    ///
    /// Upstream, schema, statistics, and CSV failures abort the run; a
    /// failed notification is captured in the report and the run continues,
    /// so the CSV write and final report still happen.
    pub async fn run(
        &self,
        symbol: &Symbol,
        output: &Path,
        alerts_enabled: bool,
    ) -> Result<RunReport, AdvisorError> {
        tracing::debug!(%symbol, "fetching daily series");
        let response = self.client.daily_series(symbol).await?;
        tracing::debug!(rows = response.series.len(), "series transformed");

        let statistics = compute(&response.series, response.last_refreshed)?;
        let recommendation = recommend(&statistics);
        let alert = decide_alert(statistics.latest_close, statistics.prior_close)?;

        let notification = if alerts_enabled && alert.should_notify {
            match AlertMessage::for_decision(symbol, &alert, &statistics)? {
                Some(message) => {
                    let outcome = self.sender.send(&message).await;
                    if let Err(error) = &outcome {
                        tracing::warn!(%error, "notification delivery failed, continuing");
                    }
                    Some(outcome)
                }
                None => None,
            }
        } else {
            None
        };

        write_to_csv(&response.series, output)?;
        tracing::debug!(path = %output.display(), "series exported");

        Ok(RunReport {
            symbol: symbol.clone(),
            statistics,
            recommendation,
            alert,
            notification,
            csv_path: output.to_path_buf(),
        })
    }
}
