//! Connection strings and the endpoints parsed out of them.

use std::fmt;
use thiserror::Error;
use url::Url;

/// An opaque credential handed to a connector at construction.
///
/// The value is never logged in full: its `Debug` output masks any password.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionString(String);

impl ConnectionString {
    /// Wrap a raw connection string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw value, secrets included.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The value with any password replaced by `***`.
    pub fn redacted(&self) -> String {
        match Url::parse(&self.0) {
            Ok(mut url) if url.password().is_some() => {
                if url.set_password(Some("***")).is_ok() {
                    url.to_string()
                } else {
                    "<opaque>".to_string()
                }
            }
            Ok(url) => url.to_string(),
            Err(_) => "<opaque>".to_string(),
        }
    }
}

impl fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionString")
            .field(&self.redacted())
            .finish()
    }
}

impl From<&str> for ConnectionString {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ConnectionString {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// The data-store family a connector speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flavor {
    /// Display name.
    pub name: &'static str,
    /// Accepted URL schemes.
    pub schemes: &'static [&'static str],
    /// Port used when the connection string names none.
    pub default_port: u16,
}

impl Flavor {
    /// MongoDB: `mongodb://` and `mongodb+srv://`, port 27017.
    pub const MONGO: Flavor = Flavor {
        name: "MongoDB",
        schemes: &["mongodb", "mongodb+srv"],
        default_port: 27017,
    };

    /// PostgreSQL: `postgres://` and `postgresql://`, port 5432.
    pub const POSTGRES: Flavor = Flavor {
        name: "PostgreSQL",
        schemes: &["postgres", "postgresql"],
        default_port: 5432,
    };
}

/// Errors from turning a connection string into an [`Endpoint`].
#[derive(Error, Debug)]
pub enum EndpointError {
    /// The connection string is not a valid URL.
    #[error("invalid connection string: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The scheme does not belong to the connector's flavor.
    #[error("unsupported scheme `{scheme}` for {flavor}")]
    UnsupportedScheme {
        /// Scheme found in the connection string.
        scheme: String,
        /// Flavor that rejected it.
        flavor: &'static str,
    },

    /// The connection string has no host.
    #[error("connection string has no host")]
    MissingHost,
}

/// Where a connector dials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// URL scheme.
    pub scheme: String,
    /// Host name or address.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Database name from the URL path, if any.
    pub database: Option<String>,
}

impl Endpoint {
    /// Parse `conn` for `flavor`.
    ///
    /// Only single-host connection strings are understood.
    pub fn parse(conn: &ConnectionString, flavor: &Flavor) -> Result<Self, EndpointError> {
        let url = Url::parse(conn.expose())?;

        if !flavor.schemes.contains(&url.scheme()) {
            return Err(EndpointError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
                flavor: flavor.name,
            });
        }

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or(EndpointError::MissingHost)?
            .to_string();

        let database = url
            .path()
            .trim_start_matches('/')
            .split('/')
            .next()
            .filter(|db| !db.is_empty())
            .map(str::to_string);

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            port: url.port().unwrap_or(flavor.default_port),
            database,
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)?;
        if let Some(db) = &self.database {
            write!(f, "/{db}")?;
        }
        Ok(())
    }
}
