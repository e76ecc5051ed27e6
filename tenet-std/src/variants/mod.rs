//! Standard variants.
//!
//! Each type here implements one or more contracts from `tenet-core` and
//! nothing else. None of them share state; construct one per use.

pub mod animals;
pub mod mail;
pub mod office;
pub mod payments;

pub use animals::{Cat, Dog, GenericAnimal};
pub use mail::ConsoleMailer;
pub use office::{BasicPrinter, FlatbedScanner, MultiFunctionMachine};
pub use payments::{BasicProcessor, CardProcessor, PaypalProcessor, StripeProcessor};
