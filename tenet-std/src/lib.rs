//! # tenet-std
//!
//! Standard implementations for the Tenet dispatch library.
//!
//! This crate provides:
//! - **Variants**: connectors, payment processors, animals, office machines, mailers
//! - **Runtime selection**: [`Registry`](registry::Registry) and the [`standard`] registries
//! - **Consumers**: callers bound to contracts, never to variants
//! - **Orders**: order lifecycle and the [`OrderDesk`](orders::OrderDesk) caller
//! - **Observation**: [`Observed`](observe::Observed) logs every outcome
//! - **Testing**: scripted collaborators and recording variants

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use tenet_core;

// Modules
pub mod connectors;
pub mod consumers;
pub mod observe;
pub mod orders;
pub mod registry;
pub mod standard;
pub mod testing;
pub mod variants;
