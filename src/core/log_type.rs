//! Logger output mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which formatter and sink a [`Logger`](super::Logger) is built with.
///
/// The mode is fixed for the lifetime of the logger.
///
/// - `Local`: human-readable, optionally colored console lines
/// - `Remote`: single-line JSON handed to an attached telemetry client
///
/// More backends may be added as variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LogType {
    #[default]
    Local,
    Remote,
}

impl LogType {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogType::Local => "local",
            LogType::Remote => "remote",
        }
    }

    /// Map the "is local environment" flag of a settings provider to a mode
    pub fn from_is_local(is_local: bool) -> Self {
        if is_local {
            LogType::Local
        } else {
            LogType::Remote
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(LogType::Local),
            "remote" => Ok(LogType::Remote),
            _ => Err(format!("Invalid log type: '{}'", s)),
        }
    }
}
