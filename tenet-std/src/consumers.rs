//! # Consumers
//!
//! Callers that bind variants at construction and use them only through their
//! contracts. None of them branch on the concrete variant, and none can be
//! rebound: to switch variants, build a new consumer.
//!
//! Every consumer reports each outcome through `tracing` and hands it back to
//! its own caller unchanged.

use tenet_core::{
    Amount, CapabilityError, ConnectionState, Connector, Document, Job, PaymentProcessor, Printer,
    Receipt, Scanner, Sound, SoundMaker,
};

/// Ask any animal for its sound.
pub fn make_animal_sound(animal: &dyn SoundMaker) -> Result<Sound, CapabilityError> {
    let outcome = animal.make_sound();
    match &outcome {
        Ok(sound) => tracing::info!(animal = animal.name(), %sound, "animal sound"),
        Err(err) => tracing::warn!(animal = animal.name(), error = %err, "no sound"),
    }
    outcome
}

// ============================================================================
// Office
// ============================================================================

/// Outcomes of one [`OfficeUser::do_task`] run.
///
/// Both steps always run, in order; one failing does not skip the other.
#[derive(Debug)]
pub struct TaskReport {
    /// Outcome of printing.
    pub printed: Result<Job, CapabilityError>,
    /// Outcome of scanning.
    pub scanned: Result<Job, CapabilityError>,
}

impl TaskReport {
    /// Returns `true` if both steps succeeded.
    pub fn is_complete(&self) -> bool {
        self.printed.is_ok() && self.scanned.is_ok()
    }

    /// Both jobs, or the first failure in task order.
    pub fn into_result(self) -> Result<(Job, Job), CapabilityError> {
        Ok((self.printed?, self.scanned?))
    }
}

/// Someone who prints and scans, and never faxes.
///
/// Depends on [`Printer`] and [`Scanner`] only. A multi-function machine can
/// be bound to both roles (for example through an `Arc`) without this type
/// knowing it can also fax.
#[derive(Debug)]
pub struct OfficeUser<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> OfficeUser<P, S> {
    /// Bind a printer and a scanner.
    pub fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }

    /// Print then scan `document`.
    pub fn do_task(&self, document: &Document) -> TaskReport {
        let printed = self.printer.print(document);
        if let Err(err) = &printed {
            tracing::warn!(device = self.printer.name(), error = %err, "print failed");
        }

        let scanned = self.scanner.scan(document);
        if let Err(err) = &scanned {
            tracing::warn!(device = self.scanner.name(), error = %err, "scan failed");
        }

        TaskReport { printed, scanned }
    }
}

// ============================================================================
// Payments
// ============================================================================

/// Takes payments through whichever processor it was built with.
#[derive(Debug)]
pub struct Checkout<P> {
    processor: P,
}

impl<P: PaymentProcessor> Checkout<P> {
    /// Bind a processor.
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    /// Pay `amount`.
    pub fn pay(&self, amount: Amount) -> Result<Receipt, CapabilityError> {
        let outcome = self.processor.process_payment(amount);
        match &outcome {
            Ok(receipt) => tracing::info!(%receipt, "payment accepted"),
            Err(err) => tracing::warn!(
                processor = self.processor.name(),
                %amount,
                error = %err,
                "payment failed"
            ),
        }
        outcome
    }
}

// ============================================================================
// Data
// ============================================================================

/// Application data access that depends only on [`Connector`].
#[derive(Debug)]
pub struct DataLayer<C> {
    connector: C,
}

impl<C: Connector> DataLayer<C> {
    /// Bind a connector.
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Connect the bound store.
    pub async fn open(&mut self) -> Result<(), CapabilityError> {
        let outcome = self.connector.connect().await;
        match &outcome {
            Ok(()) => tracing::info!(store = self.connector.name(), "connected successfully"),
            Err(err) => {
                tracing::error!(store = self.connector.name(), error = %err, "connection failed")
            }
        }
        outcome
    }

    /// State of the bound connector.
    pub fn state(&self) -> ConnectionState {
        self.connector.state()
    }

    /// Borrow the bound connector.
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Release the bound connector.
    pub fn into_inner(self) -> C {
        self.connector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        testing::CountingProcessor,
        variants::{BasicPrinter, Cat, Dog, FlatbedScanner, MultiFunctionMachine},
    };
    use std::sync::Arc;
    use tenet_core::{Fax, Unbound};

    #[test]
    fn same_call_path_for_every_animal() {
        let animals: [&dyn SoundMaker; 2] = [&Dog, &Cat];
        let sounds: Vec<_> = animals
            .into_iter()
            .map(|a| make_animal_sound(a).unwrap())
            .collect();
        assert_eq!(sounds, [Sound("Bark"), Sound("Meow")]);
    }

    #[test]
    fn office_user_with_separate_devices() {
        let user = OfficeUser::new(BasicPrinter, FlatbedScanner);
        let report = user.do_task(&Document::new("report", "q3"));
        assert!(report.is_complete());
        let (printed, scanned) = report.into_result().unwrap();
        assert_eq!(printed.device, "basic printer");
        assert_eq!(scanned.device, "flatbed scanner");
    }

    #[test]
    fn office_user_shares_one_machine() {
        let machine = Arc::new(MultiFunctionMachine);
        let user = OfficeUser::new(machine.clone(), machine);
        let (printed, scanned) = user
            .do_task(&Document::new("report", "q3"))
            .into_result()
            .unwrap();
        assert_eq!(printed.device, scanned.device);
    }

    #[test]
    fn office_user_borrows_one_machine() {
        let machine = MultiFunctionMachine;
        let user = OfficeUser::new(&machine, &machine);
        let report = user.do_task(&Document::new("report", "q3"));
        assert!(report.is_complete());
        assert!(machine.fax(&Document::new("report", "q3"), "555-0100").is_ok());
    }

    #[test]
    fn failed_print_still_scans() {
        let user = OfficeUser::new(Unbound, FlatbedScanner);
        let report = user.do_task(&Document::new("report", "q3"));
        assert!(!report.is_complete());
        assert!(report.scanned.is_ok());
        assert!(report.into_result().unwrap_err().is_not_implemented());
    }

    #[test]
    fn checkout_surfaces_declines() {
        let processor = CountingProcessor::declining();
        let checkout = Checkout::new(processor.clone());
        assert!(checkout.pay(Amount::dollars(10)).is_err());
        assert_eq!(processor.count(), 1);
    }
}
