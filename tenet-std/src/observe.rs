//! Observation wrapper.
//!
//! [`Observed`] wraps any variant and implements every contract the inner
//! variant implements. Each outcome is reported through `tracing` and then
//! returned to the caller untouched; failures are never swallowed.

use std::fmt::Display;
use tenet_core::{
    Amount, Capabilities, CapabilityError, ConnectionState, Connector, Delivery, Document, Email,
    Fax, Job, Notifier, PaymentProcessor, Printer, Receipt, Scanner, Sound, SoundMaker, Variant,
};

/// A variant whose outcomes are logged.
///
/// # Example
///
/// ```rust,ignore
/// let paypal = Observed::new(PaypalProcessor);
/// paypal.process_payment(Amount::dollars(100))?; // logs "Processing payment of $100 via PayPal"
/// ```
#[derive(Debug, Clone, Default)]
pub struct Observed<V> {
    inner: V,
}

impl<V> Observed<V> {
    /// Wrap `inner`.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped variant.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Unwrap the variant.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Variant> Observed<V> {
    fn report<T: Display>(
        &self,
        operation: &'static str,
        outcome: Result<T, CapabilityError>,
    ) -> Result<T, CapabilityError> {
        match &outcome {
            Ok(value) => {
                tracing::debug!(variant = self.inner.name(), operation, %value, "ok");
            }
            Err(err) => {
                tracing::warn!(variant = self.inner.name(), operation, error = %err, "failed");
            }
        }
        outcome
    }
}

impl<V: Variant> Variant for Observed<V> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn capabilities(&self) -> Capabilities {
        self.inner.capabilities()
    }
}

impl<V: Connector> Connector for Observed<V> {
    async fn connect(&mut self) -> Result<(), CapabilityError> {
        let outcome = self.inner.connect().await;
        let state = self.inner.state();
        self.report("connect", outcome.map(|()| StateLabel(state)))
            .map(|_| ())
    }

    fn state(&self) -> ConnectionState {
        self.inner.state()
    }
}

struct StateLabel(ConnectionState);

impl Display for StateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<V: PaymentProcessor> PaymentProcessor for Observed<V> {
    fn process_payment(&self, amount: Amount) -> Result<Receipt, CapabilityError> {
        self.report("process_payment", self.inner.process_payment(amount))
    }
}

impl<V: SoundMaker> SoundMaker for Observed<V> {
    fn make_sound(&self) -> Result<Sound, CapabilityError> {
        self.report("make_sound", self.inner.make_sound())
    }
}

impl<V: Printer> Printer for Observed<V> {
    fn print(&self, document: &Document) -> Result<Job, CapabilityError> {
        self.report("print", self.inner.print(document))
    }
}

impl<V: Scanner> Scanner for Observed<V> {
    fn scan(&self, document: &Document) -> Result<Job, CapabilityError> {
        self.report("scan", self.inner.scan(document))
    }
}

impl<V: Fax> Fax for Observed<V> {
    fn fax(&self, document: &Document, number: &str) -> Result<Job, CapabilityError> {
        self.report("fax", self.inner.fax(document, number))
    }
}

impl<V: Notifier> Notifier for Observed<V> {
    fn send(&self, email: &Email) -> Result<Delivery, CapabilityError> {
        self.report("send", self.inner.send(email))
    }
}
