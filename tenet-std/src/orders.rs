//! Order management.
//!
//! [`Order`] only manages its own lifecycle. Charging and notifying belong to
//! a [`PaymentProcessor`] and a [`Notifier`]; [`OrderDesk`] is the caller that
//! sequences the three.

use std::fmt;
use tenet_core::{
    Amount, CapabilityError, Delivery, Email, Notifier, PaymentProcessor, Receipt,
};
use thiserror::Error;

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Created, not yet placed.
    Pending,
    /// Placed.
    Placed,
    /// Cancelled; terminal.
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Placed => "placed",
            Self::Cancelled => "cancelled",
        })
    }
}

/// Errors from order operations.
#[derive(Error, Debug)]
pub enum OrderError {
    /// The order cannot move from its current status with this action.
    #[error("order {id} cannot {action} while {from}")]
    InvalidTransition {
        /// Order id.
        id: u64,
        /// Status the order was in.
        from: OrderStatus,
        /// Attempted action.
        action: &'static str,
    },

    /// Charging failed.
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// The order was charged and placed, but the confirmation was not sent.
    #[error("order {id} was charged but not confirmed: {source}")]
    Unconfirmed {
        /// Order id.
        id: u64,
        /// Receipt for the payment that went through.
        receipt: Receipt,
        /// Why the confirmation failed.
        #[source]
        source: CapabilityError,
    },
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: u64,
    customer: String,
    total: Amount,
    status: OrderStatus,
}

impl Order {
    /// Create a pending order.
    pub fn new(id: u64, customer: impl Into<String>, total: Amount) -> Self {
        Self {
            id,
            customer: customer.into(),
            total,
            status: OrderStatus::Pending,
        }
    }

    /// Order id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Customer name.
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Total price.
    pub fn total(&self) -> Amount {
        self.total
    }

    /// Pending -> Placed.
    pub fn place(&mut self) -> Result<(), OrderError> {
        if self.status != OrderStatus::Pending {
            return Err(self.invalid("place"));
        }
        self.status = OrderStatus::Placed;
        tracing::info!(order = self.id, "order placed");
        Ok(())
    }

    /// Pending or Placed -> Cancelled.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        if self.status == OrderStatus::Cancelled {
            return Err(self.invalid("cancel"));
        }
        self.status = OrderStatus::Cancelled;
        tracing::info!(order = self.id, "order cancelled");
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> OrderError {
        OrderError::InvalidTransition {
            id: self.id,
            from: self.status,
            action,
        }
    }
}

/// What a successful checkout produced.
#[derive(Debug, Clone)]
pub struct Confirmation {
    /// The payment receipt.
    pub receipt: Receipt,
    /// The confirmation delivery.
    pub delivery: Delivery,
}

/// Places orders, charges them, and confirms them by e-mail.
#[derive(Debug)]
pub struct OrderDesk<P, N> {
    processor: P,
    notifier: N,
}

impl<P: PaymentProcessor, N: Notifier> OrderDesk<P, N> {
    /// Bind a processor and a notifier.
    pub fn new(processor: P, notifier: N) -> Self {
        Self {
            processor,
            notifier,
        }
    }

    /// Place `order`, charge its total, then e-mail `address`.
    ///
    /// A declined payment cancels the order and no e-mail is sent. A failed
    /// e-mail leaves the charged order placed and returns the receipt inside
    /// [`OrderError::Unconfirmed`].
    pub fn checkout(&self, order: &mut Order, address: &str) -> Result<Confirmation, OrderError> {
        order.place()?;

        let receipt = match self.processor.process_payment(order.total()) {
            Ok(receipt) => receipt,
            Err(err) => {
                tracing::warn!(order = order.id(), error = %err, "payment failed, cancelling");
                order.cancel()?;
                return Err(err.into());
            }
        };

        let email = Email::new(
            address,
            "Order Confirmation",
            format!("Thank you for your order {}! {}", order.id(), receipt),
        );
        match self.notifier.send(&email) {
            Ok(delivery) => Ok(Confirmation { receipt, delivery }),
            Err(source) => {
                tracing::warn!(order = order.id(), error = %source, "confirmation failed");
                Err(OrderError::Unconfirmed {
                    id: order.id(),
                    receipt,
                    source,
                })
            }
        }
    }
}
