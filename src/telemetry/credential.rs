//! Credentials for telemetry backends

use crate::core::Result;
use std::fmt;

/// Opaque credential handle that can produce an access token.
pub trait Credential: Send + Sync {
    fn token(&self) -> Result<String>;
}

/// Credential backed by a fixed token
#[derive(Clone)]
pub struct StaticCredential {
    token: String,
}

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Credential for StaticCredential {
    fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

impl fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredential")
            .field("token", &"<redacted>")
            .finish()
    }
}
