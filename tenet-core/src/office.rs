//! # Office machine contracts
//!
//! Printing, scanning and faxing are three separate contracts rather than
//! one `Machine` trait. A device that can do all three implements each of
//! them; a caller that only prints and scans never depends on faxing.

use crate::{error::CapabilityError, variant::Variant};
use std::{fmt, sync::Arc};

/// A document handed to an office machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Title shown in job reports.
    pub title: String,
    /// Document contents.
    pub body: String,
}

impl Document {
    /// Create a document.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Kind of job an office machine performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobKind {
    /// The document was printed.
    Print,
    /// The document was scanned.
    Scan,
    /// The document was faxed to the given number.
    Fax {
        /// Dialled number.
        number: String,
    },
}

/// Outcome of an office machine operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// What was done.
    pub kind: JobKind,
    /// Name of the device that did it.
    pub device: &'static str,
    /// Title of the processed document.
    pub title: String,
}

impl Job {
    /// Create a job record for `document`.
    pub fn new(kind: JobKind, device: &'static str, document: &Document) -> Self {
        Self {
            kind,
            device,
            title: document.title.clone(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            JobKind::Print => write!(f, "Printing \"{}\" on {}", self.title, self.device),
            JobKind::Scan => write!(f, "Scanning \"{}\" on {}", self.title, self.device),
            JobKind::Fax { number } => write!(
                f,
                "Faxing \"{}\" to {} from {}",
                self.title, number, self.device
            ),
        }
    }
}

/// Contract for printing.
pub trait Printer: Variant {
    /// Print `document`.
    fn print(&self, document: &Document) -> Result<Job, CapabilityError>;
}

/// Contract for scanning.
pub trait Scanner: Variant {
    /// Scan `document`.
    fn scan(&self, document: &Document) -> Result<Job, CapabilityError>;
}

/// Contract for faxing.
pub trait Fax: Variant {
    /// Fax `document` to `number`.
    fn fax(&self, document: &Document, number: &str) -> Result<Job, CapabilityError>;
}

macro_rules! forward_office {
    ($($ptr:ty),*) => {$(
        impl<T: Printer + ?Sized> Printer for $ptr {
            fn print(&self, document: &Document) -> Result<Job, CapabilityError> {
                (**self).print(document)
            }
        }

        impl<T: Scanner + ?Sized> Scanner for $ptr {
            fn scan(&self, document: &Document) -> Result<Job, CapabilityError> {
                (**self).scan(document)
            }
        }

        impl<T: Fax + ?Sized> Fax for $ptr {
            fn fax(&self, document: &Document, number: &str) -> Result<Job, CapabilityError> {
                (**self).fax(document, number)
            }
        }
    )*};
}

forward_office!(&T, Box<T>, Arc<T>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_display() {
        let doc = Document::new("invoice", "...");
        assert_eq!(
            Job::new(JobKind::Print, "LaserJet", &doc).to_string(),
            "Printing \"invoice\" on LaserJet"
        );
        assert_eq!(
            Job::new(
                JobKind::Fax {
                    number: "555-0100".into()
                },
                "OfficeJet",
                &doc
            )
            .to_string(),
            "Faxing \"invoice\" to 555-0100 from OfficeJet"
        );
    }
}
