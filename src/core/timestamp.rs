//! Timestamp formatting utilities
//!
//! Every variant renders UTC. The remote wire format always uses
//! [`TimestampFormat::Rfc3339Micros`]; the console formatter is configurable.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_logger_facade::TimestampFormat;
/// use chrono::Utc;
///
/// let timestamp = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 with microseconds and explicit offset: `2025-01-08T10:30:45.123456+00:00`
    ///
    /// Used for the `timestamp` key of remote JSON lines.
    Rfc3339Micros,

    /// Custom strftime format
    ///
    /// An invalid format string falls back to [`TimestampFormat::Iso8601`]
    /// instead of failing the log call.
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339Micros => {
                datetime.to_rfc3339_opts(SecondsFormat::Micros, false)
            }
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                // chrono reports bad specifiers through fmt::Error
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return TimestampFormat::Iso8601.format(datetime);
                }
                out
            }
        }
    }
}
