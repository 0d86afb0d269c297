//! Remote telemetry collaborator
//!
//! A remote [`Logger`](crate::Logger) does not talk to a backend itself. At
//! construction it hands its authentication to a [`TelemetryClient`], which
//! attaches to the backend once and returns the [`Sink`] that JSON lines are
//! written to. Transport, batching and retries belong to the client.

pub mod connection_string;
pub mod credential;

#[cfg(feature = "remote")]
pub mod stdout;

pub use connection_string::ConnectionString;
pub use credential::{Credential, StaticCredential};

#[cfg(feature = "remote")]
pub use stdout::StdoutTelemetryClient;

use crate::core::{LoggerError, Result, Sink};
use std::fmt;
use std::sync::Arc;

/// Exactly one way of authenticating against the telemetry backend
#[derive(Clone)]
pub enum RemoteAuth {
    ConnectionString(ConnectionString),
    Credential(Arc<dyn Credential>),
}

impl RemoteAuth {
    /// Pick the authentication mode from optional construction parameters.
    ///
    /// Fails unless exactly one of the two is supplied, or when the
    /// connection string does not parse.
    pub fn resolve(
        connection_string: Option<&str>,
        credential: Option<Arc<dyn Credential>>,
    ) -> Result<Self> {
        let connection_string = connection_string.filter(|s| !s.trim().is_empty());

        match (connection_string, credential) {
            (Some(raw), None) => Ok(RemoteAuth::ConnectionString(ConnectionString::parse(raw)?)),
            (None, Some(credential)) => Ok(RemoteAuth::Credential(credential)),
            (None, None) => Err(LoggerError::config(
                "Logger",
                "remote logging requires either a connection string or a credential",
            )),
            (Some(_), Some(_)) => Err(LoggerError::config(
                "Logger",
                "remote logging takes a connection string or a credential, not both",
            )),
        }
    }
}

impl fmt::Debug for RemoteAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteAuth::ConnectionString(conn) => {
                f.debug_tuple("ConnectionString").field(conn).finish()
            }
            RemoteAuth::Credential(_) => f.write_str("Credential(<redacted>)"),
        }
    }
}

/// Client for an external telemetry backend.
///
/// `attach` is called once per remote logger and may block until the
/// backend is ready.
pub trait TelemetryClient: Send + Sync {
    fn attach(&self, auth: &RemoteAuth) -> Result<Box<dyn Sink>>;
    fn name(&self) -> &str;
}
