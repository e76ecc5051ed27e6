use super::{ConnectionString, Dialer, Driver, Flavor, Link, TcpDriver};
use std::sync::Arc;
use tenet_core::{Capabilities, CapabilityError, ConnectionState, Connector, Variant};

/// Connects to a PostgreSQL server.
///
/// Accepts `postgres://` and `postgresql://` connection strings; the port
/// defaults to 5432.
#[derive(Debug)]
pub struct PostgresConnector {
    dialer: Dialer,
}

impl PostgresConnector {
    /// Create a connector that dials over TCP.
    pub fn new(uri: impl Into<ConnectionString>) -> Self {
        Self::with_driver(uri, TcpDriver)
    }

    /// Create a connector backed by a custom driver.
    pub fn with_driver(uri: impl Into<ConnectionString>, driver: impl Driver) -> Self {
        Self {
            dialer: Dialer::new(&Flavor::POSTGRES, uri.into(), Arc::new(driver)),
        }
    }

    /// The connection string this connector was built with.
    pub fn uri(&self) -> &ConnectionString {
        self.dialer.uri()
    }

    /// The live link, once connected.
    pub fn link(&self) -> Option<&Link> {
        self.dialer.link()
    }
}

impl Variant for PostgresConnector {
    fn name(&self) -> &'static str {
        Flavor::POSTGRES.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::CONNECT
    }
}

impl Connector for PostgresConnector {
    async fn connect(&mut self) -> Result<(), CapabilityError> {
        self.dialer.connect().await
    }

    fn state(&self) -> ConnectionState {
        self.dialer.state()
    }
}
