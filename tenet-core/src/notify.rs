//! Notification contract.

use crate::{error::CapabilityError, variant::Variant};
use std::{fmt, sync::Arc};

/// An e-mail message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

impl Email {
    /// Create a message.
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Outcome of a delivered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Name of the channel that delivered the message.
    pub channel: &'static str,
    /// Recipient address.
    pub to: String,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email sent to {} via {}", self.to, self.channel)
    }
}

/// Contract for delivering notifications.
pub trait Notifier: Variant {
    /// Deliver `email`.
    fn send(&self, email: &Email) -> Result<Delivery, CapabilityError>;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn send(&self, email: &Email) -> Result<Delivery, CapabilityError> {
        (**self).send(email)
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn send(&self, email: &Email) -> Result<Delivery, CapabilityError> {
        (**self).send(email)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn send(&self, email: &Email) -> Result<Delivery, CapabilityError> {
        (**self).send(email)
    }
}
