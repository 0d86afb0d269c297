//! JSON formatter for remote telemetry ingestion
//!
//! Each record becomes one line with exactly these keys, in this order:
//!
//! ```text
//! {"name":"<string>","line":<positive int>,"func":"<string>","message":"<string>","level":"<LEVEL>","timestamp":"<RFC 3339 UTC>"}
//! ```
//!
//! Downstream consumers depend on this key set; do not add or remove keys.

use crate::core::{Formatter, LogRecord, LoggerError, Result, TimestampFormat};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Wire representation of a record sent to the telemetry backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteRecord {
    pub name: String,
    pub line: NonZeroU32,
    pub func: String,
    pub message: String,
    pub level: String,
    pub timestamp: String,
}

impl RemoteRecord {
    /// Serialize to a single JSON line
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from a JSON line
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<&LogRecord> for RemoteRecord {
    type Error = LoggerError;

    fn try_from(record: &LogRecord) -> Result<Self> {
        let line = NonZeroU32::new(record.line).ok_or_else(|| {
            LoggerError::validation("line", "must be a positive integer, got 0")
        })?;

        Ok(Self {
            name: record.name.clone(),
            line,
            func: record.func.clone(),
            message: record.message.clone(),
            level: record.level.to_str().to_string(),
            timestamp: TimestampFormat::Rfc3339Micros.format(&record.timestamp),
        })
    }
}

/// Formats records as [`RemoteRecord`] JSON lines
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteFormatter;

impl RemoteFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for RemoteFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        RemoteRecord::try_from(record)?.to_json()
    }

    fn name(&self) -> &str {
        "remote"
    }
}
