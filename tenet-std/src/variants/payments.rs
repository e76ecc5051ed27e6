//! Payment processors.
//!
//! New processors are added by implementing
//! [`PaymentProcessor`](tenet_core::PaymentProcessor) on a new type; nothing
//! in this module or in callers changes.

use tenet_core::{Amount, Capabilities, CapabilityError, PaymentProcessor, Receipt, Variant};

macro_rules! processor {
    ($(#[$doc:meta])* $ty:ident => $name:literal, $receipt:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $ty;

        impl Variant for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn capabilities(&self) -> Capabilities {
                Capabilities::PAY
            }
        }

        impl PaymentProcessor for $ty {
            fn process_payment(&self, amount: Amount) -> Result<Receipt, CapabilityError> {
                let receipt = ($receipt)(amount);
                tracing::debug!(processor = $name, %amount, "payment processed");
                Ok(receipt)
            }
        }
    };
}

processor!(
    /// The processor-agnostic path every processor builds on.
    BasicProcessor => "basic", Receipt::basic
);

processor!(
    /// Pays through PayPal.
    PaypalProcessor => "PayPal", |amount| Receipt::via("PayPal", amount)
);

processor!(
    /// Pays through Stripe.
    StripeProcessor => "Stripe", |amount| Receipt::via("Stripe", amount)
);

processor!(
    /// Charges a credit card directly.
    CardProcessor => "credit card", |amount| Receipt::via("credit card", amount)
);
