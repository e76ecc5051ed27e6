//! Office machines.
//!
//! [`MultiFunctionMachine`] provides printing, scanning and faxing by
//! implementing each narrow contract on its own. The single-purpose devices
//! implement exactly one.

use tenet_core::{
    Capabilities, CapabilityError, Document, Fax, Job, JobKind, Printer, Scanner, Variant,
};

/// A printer and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPrinter;

impl Variant for BasicPrinter {
    fn name(&self) -> &'static str {
        "basic printer"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::PRINT
    }
}

impl Printer for BasicPrinter {
    fn print(&self, document: &Document) -> Result<Job, CapabilityError> {
        tracing::info!(device = self.name(), title = %document.title, "printing");
        Ok(Job::new(JobKind::Print, self.name(), document))
    }
}

/// A scanner and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatbedScanner;

impl Variant for FlatbedScanner {
    fn name(&self) -> &'static str {
        "flatbed scanner"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SCAN
    }
}

impl Scanner for FlatbedScanner {
    fn scan(&self, document: &Document) -> Result<Job, CapabilityError> {
        tracing::info!(device = self.name(), title = %document.title, "scanning");
        Ok(Job::new(JobKind::Scan, self.name(), document))
    }
}

/// A device that prints, scans and faxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiFunctionMachine;

impl Variant for MultiFunctionMachine {
    fn name(&self) -> &'static str {
        "multi-function machine"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::PRINT | Capabilities::SCAN | Capabilities::FAX
    }
}

impl Printer for MultiFunctionMachine {
    fn print(&self, document: &Document) -> Result<Job, CapabilityError> {
        tracing::info!(device = self.name(), title = %document.title, "printing");
        Ok(Job::new(JobKind::Print, self.name(), document))
    }
}

impl Scanner for MultiFunctionMachine {
    fn scan(&self, document: &Document) -> Result<Job, CapabilityError> {
        tracing::info!(device = self.name(), title = %document.title, "scanning");
        Ok(Job::new(JobKind::Scan, self.name(), document))
    }
}

impl Fax for MultiFunctionMachine {
    fn fax(&self, document: &Document, number: &str) -> Result<Job, CapabilityError> {
        tracing::info!(device = self.name(), title = %document.title, number, "faxing");
        Ok(Job::new(
            JobKind::Fax {
                number: number.to_string(),
            },
            self.name(),
            document,
        ))
    }
}
