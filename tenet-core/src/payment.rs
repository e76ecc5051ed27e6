//! Payment contract and its outcome types.

use crate::{error::CapabilityError, variant::Variant};
use std::{fmt, sync::Arc};

/// A monetary amount in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// An amount of whole dollars.
    ///
    /// # Panics
    ///
    /// Panics if the amount does not fit in `u64` cents. Use
    /// [`Amount::checked_dollars`] for untrusted input.
    pub const fn dollars(dollars: u64) -> Self {
        match Self::checked_dollars(dollars) {
            Some(amount) => amount,
            None => panic!("amount overflows u64 cents"),
        }
    }

    /// An amount of whole dollars, or `None` if it does not fit in `u64` cents.
    pub const fn checked_dollars(dollars: u64) -> Option<Self> {
        match dollars.checked_mul(100) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// An amount in cents.
    pub const fn cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Sum of two amounts, or `None` on overflow.
    pub const fn checked_add(self, other: Amount) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// The amount in cents.
    pub const fn as_cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, cents) = (self.0 / 100, self.0 % 100);
        if cents == 0 {
            write!(f, "${whole}")
        } else {
            write!(f, "${whole}.{cents:02}")
        }
    }
}

/// Outcome of a processed payment.
///
/// A receipt references exactly the amount it was asked to process and the
/// identity of the processor that handled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Name of the processor that handled the payment, if not the basic one.
    pub processor: Option<&'static str>,
    /// The amount processed.
    pub amount: Amount,
}

impl Receipt {
    /// A receipt from the shared, processor-agnostic path.
    pub const fn basic(amount: Amount) -> Self {
        Self {
            processor: None,
            amount,
        }
    }

    /// A receipt from a named processor.
    pub const fn via(processor: &'static str, amount: Amount) -> Self {
        Self {
            processor: Some(processor),
            amount,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Processing payment of {}", self.amount)?;
        if let Some(processor) = self.processor {
            write!(f, " via {processor}")?;
        }
        Ok(())
    }
}

/// Contract for processing a payment.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot process payments",
    label = "missing `PaymentProcessor` implementation"
)]
pub trait PaymentProcessor: Variant {
    /// Process a payment of `amount`.
    fn process_payment(&self, amount: Amount) -> Result<Receipt, CapabilityError>;
}

impl<T: PaymentProcessor + ?Sized> PaymentProcessor for &T {
    fn process_payment(&self, amount: Amount) -> Result<Receipt, CapabilityError> {
        (**self).process_payment(amount)
    }
}

impl<T: PaymentProcessor + ?Sized> PaymentProcessor for Box<T> {
    fn process_payment(&self, amount: Amount) -> Result<Receipt, CapabilityError> {
        (**self).process_payment(amount)
    }
}

impl<T: PaymentProcessor + ?Sized> PaymentProcessor for Arc<T> {
    fn process_payment(&self, amount: Amount) -> Result<Receipt, CapabilityError> {
        (**self).process_payment(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_display() {
        assert_eq!(Amount::dollars(100).to_string(), "$100");
        assert_eq!(Amount::cents(1234).to_string(), "$12.34");
        assert_eq!(Amount::cents(5).to_string(), "$0.05");
    }

    #[test]
    fn checked_arithmetic_rejects_overflow() {
        assert_eq!(Amount::checked_dollars(7), Some(Amount::cents(700)));
        assert_eq!(Amount::checked_dollars(u64::MAX / 100 + 1), None);
        assert_eq!(
            Amount::dollars(1).checked_add(Amount::cents(5)),
            Some(Amount::cents(105))
        );
        assert_eq!(Amount::cents(u64::MAX).checked_add(Amount::cents(1)), None);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn dollars_panics_instead_of_wrapping() {
        let _ = Amount::dollars(u64::MAX);
    }

    #[test]
    fn receipt_display() {
        assert_eq!(
            Receipt::basic(Amount::dollars(100)).to_string(),
            "Processing payment of $100"
        );
        assert_eq!(
            Receipt::via("PayPal", Amount::dollars(100)).to_string(),
            "Processing payment of $100 via PayPal"
        );
    }
}
