#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tenet::{Capabilities, CapabilityError, Document, Job, JobKind, Printer, Scanner, Variant};

// ============================================================================
// Test Variants
// ============================================================================

/// A printer that only records what it was asked to print.
#[derive(Clone, Default)]
pub struct SpoolPrinter {
    pub spooled: Arc<Mutex<Vec<String>>>,
}

impl Variant for SpoolPrinter {
    fn name(&self) -> &'static str {
        "spool"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::PRINT
    }
}

impl Printer for SpoolPrinter {
    fn print(&self, document: &Document) -> Result<Job, CapabilityError> {
        self.spooled.lock().unwrap().push(document.title.clone());
        Ok(Job::new(JobKind::Print, self.name(), document))
    }
}

/// A scanner that records the order in which it was used relative to others.
#[derive(Clone)]
pub struct OrderedScanner {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl Variant for OrderedScanner {
    fn name(&self) -> &'static str {
        "ordered"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SCAN
    }
}

impl Scanner for OrderedScanner {
    fn scan(&self, document: &Document) -> Result<Job, CapabilityError> {
        self.order.lock().unwrap().push(self.id);
        Ok(Job::new(JobKind::Scan, self.name(), document))
    }
}

pub fn memo() -> Document {
    Document::new("memo", "lunch at noon")
}
