//! Mail delivery.

use tenet_core::{Capabilities, CapabilityError, Delivery, Email, Notifier, Variant};

/// Delivers e-mail by writing it to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMailer;

impl Variant for ConsoleMailer {
    fn name(&self) -> &'static str {
        "console"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NOTIFY
    }
}

impl Notifier for ConsoleMailer {
    fn send(&self, email: &Email) -> Result<Delivery, CapabilityError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            message = %email.body,
            "email sent"
        );
        Ok(Delivery {
            channel: "console",
            to: email.to.clone(),
        })
    }
}
