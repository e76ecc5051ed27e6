//! Testing utilities for Tenet.
//!
//! This module provides stand-ins for external collaborators and recording
//! variants, so callers can be tested without a database or mail server.
//!
//! # Features
//!
//! - [`ScriptedDriver`]: A driver that accepts or refuses every dial and records endpoints
//! - [`RecordingNotifier`]: A notifier that records every message it sends, or fails every send
//! - [`CountingProcessor`]: A payment processor that counts invocations

use crate::connectors::{Driver, Endpoint, Link};
use async_trait::async_trait;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tenet_core::{
    Amount, BoxError, Capabilities, CapabilityError, Delivery, Email, Notifier, PaymentProcessor,
    Receipt, Variant,
};

// ============================================================================
// Scripted Driver
// ============================================================================

/// A driver whose answer is fixed up front.
///
/// # Example
///
/// ```rust,ignore
/// let driver = ScriptedDriver::refusing("connection refused");
/// let mut pg = PostgresConnector::with_driver("postgres://localhost/app", driver.clone());
///
/// assert!(pg.connect().await.is_err());
/// assert_eq!(driver.dial_count(), 1);
/// ```
#[derive(Clone)]
pub struct ScriptedDriver {
    dialed: Arc<Mutex<Vec<Endpoint>>>,
    refusal: Option<String>,
}

impl ScriptedDriver {
    /// A driver that accepts every dial with a detached link.
    pub fn accepting() -> Self {
        Self {
            dialed: Arc::new(Mutex::new(Vec::new())),
            refusal: None,
        }
    }

    /// A driver that refuses every dial with `message`.
    pub fn refusing(message: impl Into<String>) -> Self {
        Self {
            dialed: Arc::new(Mutex::new(Vec::new())),
            refusal: Some(message.into()),
        }
    }

    /// Endpoints dialed so far.
    pub fn dialed(&self) -> Vec<Endpoint> {
        self.dialed.lock().unwrap().clone()
    }

    /// Number of dials so far.
    pub fn dial_count(&self) -> usize {
        self.dialed.lock().unwrap().len()
    }
}

#[async_trait]
impl Driver for ScriptedDriver {
    async fn dial(&self, endpoint: &Endpoint) -> Result<Link, BoxError> {
        self.dialed.lock().unwrap().push(endpoint.clone());
        match &self.refusal {
            Some(message) => Err(message.clone().into()),
            None => Ok(Link::detached(format!("{}:{}", endpoint.host, endpoint.port))),
        }
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// A notifier that records every message instead of sending it.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Email>>>,
    refusal: Option<String>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every send fails with `message`; nothing is recorded.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Arc::default(),
            refusal: Some(message.into()),
        }
    }

    /// Messages recorded so far.
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

impl Variant for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NOTIFY
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, email: &Email) -> Result<Delivery, CapabilityError> {
        if let Some(message) = &self.refusal {
            return Err(CapabilityError::collaborator(message.clone()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(Delivery {
            channel: "recording",
            to: email.to.clone(),
        })
    }
}

// ============================================================================
// Counting Processor
// ============================================================================

/// A payment processor that counts invocations and can be told to decline.
#[derive(Clone, Default)]
pub struct CountingProcessor {
    count: Arc<AtomicUsize>,
    decline: bool,
}

impl CountingProcessor {
    /// A processor that approves every payment.
    pub fn new() -> Self {
        Self::default()
    }

    /// A processor that declines every payment.
    pub fn declining() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            decline: true,
        }
    }

    /// Number of payments attempted.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Variant for CountingProcessor {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::PAY
    }
}

impl PaymentProcessor for CountingProcessor {
    fn process_payment(&self, amount: Amount) -> Result<Receipt, CapabilityError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        if self.decline {
            Err(CapabilityError::collaborator("card declined"))
        } else {
            Ok(Receipt::via("counting", amount))
        }
    }
}
