//! Notification content and the sender seam.
//!
//! The core builds the message for a firing alert decision; actual delivery
//! (email, SMS, webhook) lives behind [`NotificationSender`] and is supplied
//! by the caller. Delivery is best-effort: a sender failure must never
//! abort the rest of the run.

use std::future::Future;
use std::pin::Pin;

use crate::currency::to_usd;
use crate::error::AdvisorError;
use crate::{AlertDecision, AlertDirection, Statistics, Symbol, ValidationError};

/// Rendered alert content handed to a sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    pub body: String,
}

impl AlertMessage {
    /// Build the increase/decrease template for a firing decision. Returns
    /// `None` when the decision does not warrant a notification.
    pub fn for_decision(
        symbol: &Symbol,
        decision: &AlertDecision,
        stats: &Statistics,
    ) -> Result<Option<Self>, ValidationError> {
        let movement = match decision.direction {
            AlertDirection::None => return Ok(None),
            AlertDirection::Increase => "up",
            AlertDirection::Decrease => "down",
        };

        let magnitude = decision.percent_change.abs() * 100.0;
        let subject = format!("Price movement alert: {symbol} {movement} {magnitude:.2}% today");
        let body = format!(
            "{symbol} closed at {} on {}, {movement} {magnitude:.2}% from the prior close of {} on {}.",
            to_usd(stats.latest_close)?,
            stats.latest_day,
            to_usd(stats.prior_close)?,
            stats.prior_day,
        );

        Ok(Some(Self { subject, body }))
    }
}

/// Delivery status reported back by a sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub provider: String,
}

impl DeliveryReceipt {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }
}

/// Delivery contract for alert notifications. Implementations own their
/// credentials and transport; the core only supplies content and interprets
/// the outcome.
pub trait NotificationSender: Send + Sync {
    fn send<'a>(
        &'a self,
        message: &'a AlertMessage,
    ) -> Pin<Box<dyn Future<Output = Result<DeliveryReceipt, AdvisorError>> + Send + 'a>>;
}

/// Sender that acknowledges without delivering anywhere. Default wiring for
/// offline runs and tests.
#[derive(Debug, Default)]
pub struct NoopSender;

impl NotificationSender for NoopSender {
    fn send<'a>(
        &'a self,
        message: &'a AlertMessage,
    ) -> Pin<Box<dyn Future<Output = Result<DeliveryReceipt, AdvisorError>> + Send + 'a>> {
        let _ = message;
        Box::pin(async move { Ok(DeliveryReceipt::new("noop")) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradingDate;

    fn stats(latest_close: f64, prior_close: f64) -> Statistics {
        Statistics {
            latest_close,
            latest_day: TradingDate::parse("2018-06-08").expect("date"),
            prior_close,
            prior_day: TradingDate::parse("2018-06-07").expect("date"),
            recent_high: latest_close.max(prior_close),
            recent_low: latest_close.min(prior_close),
            last_refreshed: TradingDate::parse("2018-06-08").expect("date"),
        }
    }

    #[test]
    fn renders_the_increase_template() {
        let symbol = Symbol::parse("MSFT").expect("symbol");
        let decision = crate::alert::decide_alert(107.0, 100.0).expect("decision");

        let message = AlertMessage::for_decision(&symbol, &decision, &stats(107.0, 100.0))
            .expect("formats")
            .expect("should produce a message");
        assert_eq!(message.subject, "Price movement alert: MSFT up 7.00% today");
        assert!(message.body.contains("$107.00"));
        assert!(message.body.contains("$100.00"));
        assert!(message.body.contains("2018-06-08"));
    }

    #[test]
    fn renders_the_decrease_template() {
        let symbol = Symbol::parse("MSFT").expect("symbol");
        let decision = crate::alert::decide_alert(92.5, 100.0).expect("decision");

        let message = AlertMessage::for_decision(&symbol, &decision, &stats(92.5, 100.0))
            .expect("formats")
            .expect("should produce a message");
        assert_eq!(message.subject, "Price movement alert: MSFT down 7.50% today");
    }

    #[test]
    fn quiet_decision_produces_no_message() {
        let symbol = Symbol::parse("MSFT").expect("symbol");
        let decision = crate::alert::decide_alert(101.0, 100.0).expect("decision");

        let message = AlertMessage::for_decision(&symbol, &decision, &stats(101.0, 100.0))
            .expect("formats");
        assert!(message.is_none());
    }
}
