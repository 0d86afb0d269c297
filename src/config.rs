//! Environment-backed settings
//!
//! Callers use these to decide how to build their loggers; the logger itself
//! never reads the environment. The default timer logger is the exception and
//! is configured from [`Settings::from_env`].

use crate::core::{LogLevel, LogType, LoggerError, Result};

/// `true` selects local console logging, `false` remote telemetry.
pub const IS_LOCAL_ENV: &str = "IS_LOCAL";

/// Enables debug-level output.
pub const DEBUG_ENV: &str = "DEBUG";

/// Connection string for remote telemetry.
pub const CONNECTION_STRING_ENV: &str = "TELEMETRY_CONNECTION_STRING";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub is_local: bool,
    pub debug: bool,
    pub connection_string: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_local: true,
            debug: false,
            connection_string: None,
        }
    }
}

impl Settings {
    /// Read settings from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_facade::config::Settings;
    /// use rust_logger_facade::LogType;
    ///
    /// let settings = Settings::from_lookup(|key| match key {
    ///     "IS_LOCAL" => Some("false".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(settings.log_type(), LogType::Remote);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let is_local = match lookup(IS_LOCAL_ENV) {
            Some(value) => parse_bool(IS_LOCAL_ENV, &value)?,
            None => defaults.is_local,
        };
        let debug = match lookup(DEBUG_ENV) {
            Some(value) => parse_bool(DEBUG_ENV, &value)?,
            None => defaults.debug,
        };
        let connection_string = lookup(CONNECTION_STRING_ENV).filter(|s| !s.trim().is_empty());

        Ok(Self {
            is_local,
            debug,
            connection_string,
        })
    }

    pub fn log_type(&self) -> LogType {
        LogType::from_is_local(self.is_local)
    }

    /// Lowest level loggers built from these settings emit
    pub fn min_level(&self) -> LogLevel {
        if self.debug {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::config(
            "Settings",
            format!("{} must be a boolean, got '{}'", key, value),
        )),
    }
}
