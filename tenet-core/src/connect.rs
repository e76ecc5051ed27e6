//! # Connection contract
//!
//! The one asynchronous contract. A connector owns its configuration (for
//! example a connection string) and drives a tiny state machine:
//!
//! ```text
//! Unconnected --connect ok--> Connected
//! Unconnected --connect err-> Failed
//! ```
//!
//! `Failed` is terminal. There is no retry or reconnection; a new binding has
//! to be constructed instead.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Connector`] uses native `async fn` in traits for zero-cost static
//! dispatch. For registries and other runtime selection use [`DynConnector`],
//! which every `Connector` implements automatically.

use crate::{error::CapabilityError, variant::Variant};
use futures::future::BoxFuture;
use std::future::Future;

/// Lifecycle of a connection-style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Constructed, `connect()` not yet called.
    #[default]
    Unconnected,
    /// The collaborator accepted the connection.
    Connected,
    /// The collaborator rejected the connection.
    Failed,
}

impl ConnectionState {
    /// Returns `true` for [`ConnectionState::Connected`].
    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}

/// Contract for connecting to a data store.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot connect to a data store",
    label = "missing `Connector` implementation",
    note = "Connectors must implement `connect` and report their `state`."
)]
pub trait Connector: Variant {
    /// Establish the connection through the external collaborator.
    ///
    /// Collaborator failures are returned as
    /// [`CapabilityError::Collaborator`] without modification.
    fn connect(&mut self) -> impl Future<Output = Result<(), CapabilityError>> + Send;

    /// Current lifecycle state.
    fn state(&self) -> ConnectionState;
}

/// Dynamic object-safe version of [`Connector`].
///
/// Use this trait when the variant is selected at runtime (e.g. from a
/// registry keyed by configuration).
pub trait DynConnector: Variant {
    /// Establish the connection (dynamic dispatch version).
    fn connect_dyn(&mut self) -> BoxFuture<'_, Result<(), CapabilityError>>;

    /// Current lifecycle state.
    fn state_dyn(&self) -> ConnectionState;
}

// Blanket implementation: any type implementing Connector implements DynConnector automatically.
impl<T: Connector> DynConnector for T {
    fn connect_dyn(&mut self) -> BoxFuture<'_, Result<(), CapabilityError>> {
        Box::pin(self.connect())
    }

    fn state_dyn(&self) -> ConnectionState {
        self.state()
    }
}

// Allow Box<dyn DynConnector> to be used where Connector is expected.
impl Connector for Box<dyn DynConnector> {
    async fn connect(&mut self) -> Result<(), CapabilityError> {
        (**self).connect_dyn().await
    }

    fn state(&self) -> ConnectionState {
        (**self).state_dyn()
    }
}
