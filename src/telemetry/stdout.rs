//! Built-in telemetry client that ships JSON lines on stdout
//!
//! Suited to platforms whose agent collects container stdout and forwards
//! it to the telemetry backend.

use super::{RemoteAuth, TelemetryClient};
use crate::core::{LoggerError, Result, Sink};
use crate::sinks::ConsoleSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTelemetryClient;

impl StdoutTelemetryClient {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetryClient for StdoutTelemetryClient {
    fn attach(&self, auth: &RemoteAuth) -> Result<Box<dyn Sink>> {
        match auth {
            RemoteAuth::ConnectionString(_) => {}
            RemoteAuth::Credential(credential) => {
                let token = credential
                    .token()
                    .map_err(|e| LoggerError::connectivity(self.name(), e.to_string()))?;
                if token.trim().is_empty() {
                    return Err(LoggerError::connectivity(
                        self.name(),
                        "credential produced an empty token",
                    ));
                }
            }
        }

        Ok(Box::new(ConsoleSink::stdout().named("telemetry")))
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{Credential, StaticCredential};
    use std::sync::Arc;

    struct Expired;

    impl Credential for Expired {
        fn token(&self) -> Result<String> {
            Err(LoggerError::other("token expired"))
        }
    }

    #[test]
    fn test_attach_with_connection_string() {
        let auth = RemoteAuth::resolve(Some("InstrumentationKey=abc"), None).unwrap();
        let sink = StdoutTelemetryClient::new().attach(&auth).unwrap();
        assert_eq!(sink.name(), "telemetry");
    }

    #[test]
    fn test_attach_rejects_failing_credential() {
        let credential: Arc<dyn Credential> = Arc::new(Expired);
        let auth = RemoteAuth::Credential(credential);

        let err = StdoutTelemetryClient::new().attach(&auth).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Telemetry backend 'stdout' unavailable: token expired"
        );
    }

    #[test]
    fn test_attach_rejects_empty_token() {
        let credential: Arc<dyn Credential> = Arc::new(StaticCredential::new(" "));
        let auth = RemoteAuth::Credential(credential);

        assert!(matches!(
            StdoutTelemetryClient::new().attach(&auth),
            Err(LoggerError::Connectivity { .. })
        ));
    }
}
