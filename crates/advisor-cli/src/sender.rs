//! Log-backed notification sender.
//!
//! Stand-in for a real email/SMS collaborator: emits the alert content
//! through the tracing pipeline so operators see it in the process log.

use std::future::Future;
use std::pin::Pin;

use advisor_core::{AdvisorError, AlertMessage, DeliveryReceipt, NotificationSender};

#[derive(Debug, Default)]
pub struct LogSender;

impl NotificationSender for LogSender {
    fn send<'a>(
        &'a self,
        message: &'a AlertMessage,
    ) -> Pin<Box<dyn Future<Output = Result<DeliveryReceipt, AdvisorError>> + Send + 'a>> {
        Box::pin(async move {
            tracing::info!(subject = %message.subject, body = %message.body, "price alert");
            Ok(DeliveryReceipt::new("log"))
        })
    }
}
