use super::{ConnectionString, Dialer, Driver, Flavor, Link, TcpDriver};
use std::sync::Arc;
use tenet_core::{Capabilities, CapabilityError, ConnectionState, Connector, Variant};

/// Connects to a MongoDB deployment.
///
/// Accepts `mongodb://` and `mongodb+srv://` connection strings; the port
/// defaults to 27017.
#[derive(Debug)]
pub struct MongoConnector {
    dialer: Dialer,
}

impl MongoConnector {
    /// Create a connector that dials over TCP.
    pub fn new(uri: impl Into<ConnectionString>) -> Self {
        Self::with_driver(uri, TcpDriver)
    }

    /// Create a connector backed by a custom driver.
    pub fn with_driver(uri: impl Into<ConnectionString>, driver: impl Driver) -> Self {
        Self {
            dialer: Dialer::new(&Flavor::MONGO, uri.into(), Arc::new(driver)),
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

impl Variant for MongoConnector {
    fn name(&self) -> &'static str {
        Flavor::MONGO.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::CONNECT
    }
}

impl Connector for MongoConnector {
    async fn connect(&mut self) -> Result<(), CapabilityError> {
        self.dialer.connect().await
    }

    fn state(&self) -> ConnectionState {
        self.dialer.state()
    }
}
