//! The external collaborator seam.
//!
//! A [`Driver`] is the black box behind `connect()`: it is handed an
//! [`Endpoint`] and either returns a live [`Link`] or an opaque error. The
//! connectors never interpret driver errors; they pass them through.

use super::endpoint::Endpoint;
use async_trait::async_trait;
use tenet_core::BoxError;
use tokio::net::TcpStream;

/// An established connection held by a connector.
#[derive(Debug)]
pub struct Link {
    peer: String,
    stream: Option<TcpStream>,
}

impl Link {
    /// A link backed by a TCP stream.
    pub fn tcp(stream: TcpStream) -> Self {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "<unknown>".to_string());
        Self {
            peer,
            stream: Some(stream),
        }
    }

    /// A link with no underlying socket.
    pub fn detached(peer: impl Into<String>) -> Self {
        Self {
            peer: peer.into(),
            stream: None,
        }
    }

    /// Address of the remote side.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Returns `true` if the link owns a socket.
    pub fn is_socket(&self) -> bool {
        self.stream.is_some()
    }
}

/// The client library a connector delegates to.
#[async_trait]
pub trait Driver: Send + Sync + 'static {
    /// Open a connection to `endpoint`.
    async fn dial(&self, endpoint: &Endpoint) -> Result<Link, BoxError>;
}

/// Default driver: a plain TCP dial to the endpoint's host and port.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpDriver;

#[async_trait]
impl Driver for TcpDriver {
    async fn dial(&self, endpoint: &Endpoint) -> Result<Link, BoxError> {
        let stream = TcpStream::connect((endpoint.host.as_str(), endpoint.port)).await?;
        Ok(Link::tcp(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn endpoint(port: u16) -> Endpoint {
        Endpoint {
            scheme: "postgres".into(),
            host: "127.0.0.1".into(),
            port,
            database: None,
        }
    }

    #[tokio::test]
    async fn tcp_driver_dials_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let link = TcpDriver.dial(&endpoint(port)).await.unwrap();
        assert!(link.is_socket());
        assert_eq!(link.peer(), format!("127.0.0.1:{port}"));
    }

    #[tokio::test]
    async fn tcp_driver_reports_refusal() {
        // Bind then drop to get a port nobody listens on.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        assert!(TcpDriver.dial(&endpoint(port)).await.is_err());
    }
}
