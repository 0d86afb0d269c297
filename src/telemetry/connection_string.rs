//! Telemetry connection strings
//!
//! Format: `Key=Value` pairs separated by `;`, e.g.
//! `InstrumentationKey=00000000-0000-0000-0000-000000000000;IngestionEndpoint=https://ingest.example/`.
//! Keys are case-insensitive and empty segments are ignored.

use crate::core::{LoggerError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const INSTRUMENTATION_KEY: &str = "instrumentationkey";
const INGESTION_ENDPOINT: &str = "ingestionendpoint";

#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionString {
    raw: String,
    // keys are stored lowercased
    pairs: BTreeMap<String, String>,
}

impl ConnectionString {
    pub fn parse(raw: &str) -> Result<Self> {
        let mut pairs = BTreeMap::new();

        for segment in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = segment.split_once('=').ok_or_else(|| {
                LoggerError::config(
                    "ConnectionString",
                    format!("segment '{}' is not a Key=Value pair", redact_segment(segment)),
                )
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(LoggerError::config("ConnectionString", "empty key"));
            }
            pairs.insert(key.to_ascii_lowercase(), value.trim().to_string());
        }

        match pairs.get(INSTRUMENTATION_KEY) {
            Some(key) if !key.is_empty() => {}
            _ => {
                return Err(LoggerError::config(
                    "ConnectionString",
                    "InstrumentationKey is required",
                ))
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            pairs,
        })
    }

    /// Look up a value by case-insensitive key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn instrumentation_key(&self) -> &str {
        self.get(INSTRUMENTATION_KEY).unwrap_or_default()
    }

    pub fn ingestion_endpoint(&self) -> Option<&str> {
        self.get(INGESTION_ENDPOINT)
    }

    /// The string exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for ConnectionString {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // values may be secrets
        let keys: Vec<&str> = self.pairs.keys().map(String::as_str).collect();
        f.debug_struct("ConnectionString")
            .field("keys", &keys)
            .field("ingestion_endpoint", &self.ingestion_endpoint())
            .finish()
    }
}

fn redact_segment(segment: &str) -> String {
    let visible: String = segment.chars().take(4).collect();
    format!("{}...", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "InstrumentationKey=00000000-0000-0000-0000-000000000000;IngestionEndpoint=https://test.ingest.example/";

    #[test]
    fn test_parse_sample() {
        let conn = ConnectionString::parse(SAMPLE).unwrap();
        assert_eq!(conn.instrumentation_key(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(conn.ingestion_endpoint(), Some("https://test.ingest.example/"));
        assert_eq!(conn.as_str(), SAMPLE);
    }

    #[test]
    fn test_keys_are_case_insensitive_and_empty_segments_ignored() {
        let conn: ConnectionString = "instrumentationkey=abc;;  ".parse().unwrap();
        assert_eq!(conn.get("InstrumentationKey"), Some("abc"));
        assert_eq!(conn.ingestion_endpoint(), None);
    }

    #[test]
    fn test_missing_instrumentation_key() {
        let err = ConnectionString::parse("IngestionEndpoint=https://x/").unwrap_err();
        assert!(err.is_configuration());

        let err = ConnectionString::parse("InstrumentationKey=").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_malformed_segment() {
        let err = ConnectionString::parse("InstrumentationKey=abc;garbage").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("garb..."));
    }

    #[test]
    fn test_debug_redacts_values() {
        let conn = ConnectionString::parse("InstrumentationKey=super-secret").unwrap();
        let debug = format!("{:?}", conn);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("instrumentationkey"));
    }
}
