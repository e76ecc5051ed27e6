//! The `Unbound` variant.
//!
//! Contracts have no default bodies, so forgetting an override is a compile
//! error. `Unbound` is the runtime counterpart: a placeholder bound where no
//! real variant exists yet. It advertises no capabilities and every operation
//! returns [`CapabilityError::NotImplemented`].

use crate::{
    connect::{ConnectionState, Connector},
    error::CapabilityError,
    notify::{Delivery, Email, Notifier},
    office::{Document, Fax, Job, Printer, Scanner},
    payment::{Amount, PaymentProcessor, Receipt},
    sound::{Sound, SoundMaker},
    variant::{Capabilities, Variant},
};

/// A variant that implements every contract and provides none of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbound;

impl Variant for Unbound {
    fn name(&self) -> &'static str {
        "unbound"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }
}

impl Connector for Unbound {
    async fn connect(&mut self) -> Result<(), CapabilityError> {
        Err(CapabilityError::not_implemented("Connector", "connect"))
    }

    fn state(&self) -> ConnectionState {
        ConnectionState::Unconnected
    }
}

impl PaymentProcessor for Unbound {
    fn process_payment(&self, _amount: Amount) -> Result<Receipt, CapabilityError> {
        Err(CapabilityError::not_implemented(
            "PaymentProcessor",
            "process_payment",
        ))
    }
}

impl SoundMaker for Unbound {
    fn make_sound(&self) -> Result<Sound, CapabilityError> {
        Err(CapabilityError::not_implemented("SoundMaker", "make_sound"))
    }
}

impl Printer for Unbound {
    fn print(&self, _document: &Document) -> Result<Job, CapabilityError> {
        Err(CapabilityError::not_implemented("Printer", "print"))
    }
}

impl Scanner for Unbound {
    fn scan(&self, _document: &Document) -> Result<Job, CapabilityError> {
        Err(CapabilityError::not_implemented("Scanner", "scan"))
    }
}

impl Fax for Unbound {
    fn fax(&self, _document: &Document, _number: &str) -> Result<Job, CapabilityError> {
        Err(CapabilityError::not_implemented("Fax", "fax"))
    }
}

impl Notifier for Unbound {
    fn send(&self, _email: &Email) -> Result<Delivery, CapabilityError> {
        Err(CapabilityError::not_implemented("Notifier", "send"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sync_operation_signals_not_implemented() {
        let doc = Document::new("memo", "");
        assert!(
            Unbound
                .process_payment(Amount::dollars(1))
                .unwrap_err()
                .is_not_implemented()
        );
        assert!(Unbound.make_sound().unwrap_err().is_not_implemented());
        assert!(Unbound.print(&doc).unwrap_err().is_not_implemented());
        assert!(Unbound.scan(&doc).unwrap_err().is_not_implemented());
        assert!(Unbound.fax(&doc, "0").unwrap_err().is_not_implemented());
        assert!(
            Unbound
                .send(&Email::new("a@b.c", "s", "b"))
                .unwrap_err()
                .is_not_implemented()
        );
    }

    #[tokio::test]
    async fn connect_signals_not_implemented_and_stays_unconnected() {
        let mut unbound = Unbound;
        let err = unbound.connect().await.unwrap_err();
        assert!(matches!(
            err,
            CapabilityError::NotImplemented {
                contract: "Connector",
                operation: "connect"
            }
        ));
        assert_eq!(unbound.state(), ConnectionState::Unconnected);
    }

    #[test]
    fn advertises_nothing() {
        assert!(Unbound.capabilities().is_empty());
    }
}
