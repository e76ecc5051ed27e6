//! # tenet-core
//!
//! Capability contracts for the Tenet dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by code
//! that provides variants without needing the standard set in `tenet-std`.
//!
//! # Contracts, Variants, Callers
//!
//! - A **contract** is a trait with no default body: [`Connector`],
//!   [`PaymentProcessor`], [`SoundMaker`], [`Printer`], [`Scanner`], [`Fax`],
//!   [`Notifier`]. Each operation returns `Result<Outcome, CapabilityError>`.
//! - A **variant** is a concrete type implementing one or more contracts.
//!   Every variant implements [`Variant`] so callers can name it and check its
//!   [`Capabilities`] without knowing its concrete type.
//! - A **caller** binds one variant per capability at construction and only
//!   ever talks to it through the contract.
//!
//! Contracts are deliberately narrow. A device that prints, scans and faxes
//! implements three traits; a caller that only prints depends only on
//! [`Printer`].
//!
//! # Error Types
//!
//! - [`TenetError`] - Top-level error type
//! - [`CapabilityError`] - Errors returned by contract operations
//! - [`RegistryError`] - Registry lookup and registration errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod connect;
mod error;
mod notify;
mod office;
mod payment;
mod sound;
mod unbound;
mod variant;

// Re-exports
pub use connect::{ConnectionState, Connector, DynConnector};
pub use error::{BoxError, CapabilityError, RegistryError, TenetError};
pub use notify::{Delivery, Email, Notifier};
pub use office::{Document, Fax, Job, JobKind, Printer, Scanner};
pub use payment::{Amount, PaymentProcessor, Receipt};
pub use sound::{Sound, SoundMaker};
pub use unbound::Unbound;
pub use variant::{Capabilities, Capability, Variant};
