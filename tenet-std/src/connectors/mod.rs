//! Data-store connectors.
//!
//! [`MongoConnector`] and [`PostgresConnector`] implement
//! [`Connector`](tenet_core::Connector) on top of a shared state machine.
//! Both take their connection string at construction and reach the data
//! store only through a [`Driver`].

pub mod driver;
pub mod endpoint;
mod mongo;
mod postgres;

pub use driver::{Driver, Link, TcpDriver};
pub use endpoint::{ConnectionString, Endpoint, EndpointError, Flavor};
pub use mongo::MongoConnector;
pub use postgres::PostgresConnector;

use std::sync::Arc;
use tenet_core::{BoxError, CapabilityError, ConnectionState};

/// Connection state shared by every connector flavor.
///
/// Drives `Unconnected -> Connected | Failed`. `Failed` is terminal.
pub(crate) struct Dialer {
    flavor: &'static Flavor,
    uri: ConnectionString,
    driver: Arc<dyn Driver>,
    state: ConnectionState,
    link: Option<Link>,
}

impl Dialer {
    pub(crate) fn new(
        flavor: &'static Flavor,
        uri: ConnectionString,
        driver: Arc<dyn Driver>,
    ) -> Self {
        Self {
            flavor,
            uri,
            driver,
            state: ConnectionState::Unconnected,
            link: None,
        }
    }

    pub(crate) async fn connect(&mut self) -> Result<(), CapabilityError> {
        match self.state {
            ConnectionState::Connected => return Ok(()),
            ConnectionState::Failed => {
                return Err(CapabilityError::InvalidState {
                    variant: self.flavor.name,
                    state: self.state,
                });
            }
            ConnectionState::Unconnected => {}
        }

        match self.dial().await {
            Ok(link) => {
                tracing::debug!(variant = self.flavor.name, peer = link.peer(), "connected");
                self.link = Some(link);
                self.state = ConnectionState::Connected;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(variant = self.flavor.name, error = %err, "connection failed");
                self.state = ConnectionState::Failed;
                Err(CapabilityError::Collaborator(err))
            }
        }
    }

    async fn dial(&self) -> Result<Link, BoxError> {
        let endpoint = Endpoint::parse(&self.uri, self.flavor)?;
        tracing::trace!(
            variant = self.flavor.name,
            host = %endpoint.host,
            port = endpoint.port,
            "dialing"
        );
        self.driver.dial(&endpoint).await
    }

    pub(crate) fn state(&self) -> ConnectionState {
        self.state
    }

    pub(crate) fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub(crate) fn uri(&self) -> &ConnectionString {
        &self.uri
    }
}

impl std::fmt::Debug for Dialer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialer")
            .field("flavor", &self.flavor.name)
            .field("uri", &self.uri)
            .field("state", &self.state)
            .field("link", &self.link)
            .finish()
    }
}
