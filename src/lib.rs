//! # Rust Logger Facade
//!
//! One logging interface for application code, with the output chosen when
//! the logger is built, plus a timing instrument that reports through it.
//!
//! ## Features
//!
//! - **Two modes**: colored console lines locally, single-line JSON for a
//!   remote telemetry backend
//! - **Never fails the caller**: sink errors are reported on stderr, not returned
//! - **Timer**: scoped guard or function wrapper with the same semantics
//! - **Thread safe**: share a logger with `Arc`
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::config::Settings;
//!
//! let settings = Settings::default();
//! let logger = LoggerBuilder::from_settings("app", &settings).build().unwrap();
//!
//! let answer = Timer::new("compute").measure(|| 6 * 7);
//! logger.info(format!("answer is {}", answer));
//! ```

pub mod config;
pub mod core;
pub mod formatters;
pub mod macros;
pub mod sinks;
pub mod telemetry;
pub mod timer;

pub mod prelude {
    pub use crate::core::{
        CallSite, ExceptionInfo, Formatter, LogLevel, LogRecord, LogType, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, Result, Sink, TimestampFormat,
    };
    pub use crate::formatters::{LocalFormatter, RemoteFormatter, RemoteRecord};
    pub use crate::sinks::ConsoleSink;
    pub use crate::telemetry::{
        ConnectionString, Credential, RemoteAuth, StaticCredential, TelemetryClient,
    };
    pub use crate::timer::{Timer, TimerGuard};
}

pub use crate::core::{
    CallSite, ExceptionInfo, Formatter, LogLevel, LogRecord, LogType, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, Result, Sink, TimestampFormat,
};
pub use crate::formatters::{LocalFormatter, RemoteFormatter, RemoteRecord};
pub use crate::sinks::ConsoleSink;
pub use crate::telemetry::{ConnectionString, Credential, RemoteAuth, StaticCredential, TelemetryClient};
pub use crate::timer::{Timer, TimerGuard};
