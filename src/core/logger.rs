//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    formatter::Formatter,
    log_level::LogLevel,
    log_record::{CallSite, ExceptionInfo, LogRecord},
    log_type::LogType,
    message::interpolate,
    metrics::LoggerMetrics,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::config::Settings;
use crate::formatters::{LocalFormatter, RemoteFormatter};
use crate::sinks::ConsoleSink;
use crate::telemetry::{Credential, RemoteAuth, TelemetryClient};
use parking_lot::Mutex;
use std::any::Any;
use std::fmt;
use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// A named logger bound to one formatter and one sink for its lifetime.
///
/// Logging never fails from the caller's point of view: sink errors and
/// panics inside the formatter or sink are reported on stderr and counted in
/// [`LoggerMetrics`].
///
/// # Example
///
/// ```
/// use rust_logger_facade::Logger;
///
/// let logger = Logger::new("billing").unwrap();
/// logger.info("invoice sent");
/// logger.log_args(rust_logger_facade::LogLevel::Warning, "retry {} of {}", &[&1, &3]);
/// ```
pub struct Logger {
    name: String,
    log_type: LogType,
    min_level: LogLevel,
    formatter: Box<dyn Formatter>,
    sink: Mutex<Box<dyn Sink>>,
    /// Metrics for observability (written, dropped, rejected)
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a local console logger
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::builder(name).build()
    }

    /// Create a remote logger authenticated by a connection string
    pub fn remote(name: impl Into<String>, connection_string: impl Into<String>) -> Result<Self> {
        Self::builder(name)
            .log_type(LogType::Remote)
            .connection_string(connection_string)
            .build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_logger_facade::prelude::*;
    ///
    /// let logger = Logger::builder("api")
    ///     .min_level(LogLevel::Info)
    ///     .colors(false)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.name(), "api");
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn log_type(&self) -> LogType {
        self.log_type
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_at(level, message, CallSite::caller());
    }

    /// Log a template with positional arguments, see [`interpolate`]
    #[track_caller]
    pub fn log_args(&self, level: LogLevel, template: &str, args: &[&dyn fmt::Display]) {
        if !self.is_enabled(level) {
            return;
        }
        self.log_at(level, interpolate(template, args), CallSite::caller());
    }

    /// Log with an explicit call site (used by the logging macros)
    pub fn log_at(&self, level: LogLevel, message: impl Into<String>, site: CallSite) {
        if !self.is_enabled(level) {
            return;
        }

        let record = LogRecord::new(self.name.as_str(), level, message, site);
        self.dispatch(record);
    }

    #[track_caller]
    fn log_exception<E>(&self, level: LogLevel, message: impl Into<String>, error: &E)
    where
        E: std::error::Error + ?Sized,
    {
        if !self.is_enabled(level) {
            return;
        }

        let record = LogRecord::new(self.name.as_str(), level, message, CallSite::caller())
            .with_exception(ExceptionInfo::from_error(error));
        self.dispatch(record);
    }

    /// Emit a caller-built record.
    ///
    /// Returns a validation error for structurally invalid records. Failures
    /// of the sink are contained like any other log call.
    pub fn emit(&self, record: LogRecord) -> Result<()> {
        if !self.is_enabled(record.level) {
            return Ok(());
        }

        if let Err(e) = record.validate() {
            self.metrics.record_validation_failure();
            return Err(e);
        }

        let formatted = catch_unwind(AssertUnwindSafe(|| self.formatter.format(&record)));
        let line = match formatted {
            Ok(Ok(line)) => line,
            Ok(Err(e)) if e.is_validation() => {
                self.metrics.record_validation_failure();
                return Err(e);
            }
            Ok(Err(e)) => {
                eprintln!(
                    "[LOGGER ERROR] Formatter '{}' failed for logger '{}': {}",
                    self.formatter.name(),
                    self.name,
                    e
                );
                self.metrics.record_dropped();
                return Ok(());
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Formatter '{}' panicked for logger '{}': {}",
                    self.formatter.name(),
                    self.name,
                    panic_message(&*panic_info)
                );
                self.metrics.record_dropped();
                return Ok(());
            }
        };

        self.write_line(&line);
        Ok(())
    }

    /// Format a record with this logger's formatter without writing it
    pub fn format(&self, record: &LogRecord) -> Result<String> {
        record.validate()?;
        self.formatter.format(record)
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    fn dispatch(&self, record: LogRecord) {
        if let Err(e) = self.emit(record) {
            eprintln!("[LOGGER ERROR] Logger '{}' rejected a record: {}", self.name, e);
        }
    }

    /// Write one line with panic isolation; the lock keeps lines whole
    fn write_line(&self, line: &str) {
        let mut sink = self.sink.lock();

        let result = catch_unwind(AssertUnwindSafe(|| sink.write_line(line)));
        match result {
            Ok(Ok(())) => {
                self.metrics.record_logged();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                self.metrics.record_dropped();
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}",
                    sink.name(),
                    panic_message(&*panic_info)
                );
                self.metrics.record_dropped();
            }
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }

    /// Severity shorthands for [`Logger::log_args`]
    ///
    /// ```
    /// use rust_logger_facade::Logger;
    ///
    /// let logger = Logger::new("billing").unwrap();
    /// logger.info_args("invoice {} sent to {}", &[&1042, &"acme"]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn debug_args(&self, template: &str, args: &[&dyn fmt::Display]) {
        self.log_args(LogLevel::Debug, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn info_args(&self, template: &str, args: &[&dyn fmt::Display]) {
        self.log_args(LogLevel::Info, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn warning_args(&self, template: &str, args: &[&dyn fmt::Display]) {
        self.log_args(LogLevel::Warning, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn error_args(&self, template: &str, args: &[&dyn fmt::Display]) {
        self.log_args(LogLevel::Error, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn critical_args(&self, template: &str, args: &[&dyn fmt::Display]) {
        self.log_args(LogLevel::Critical, template, args);
    }

    /// Log at ERROR with the error's type, message and trace attached
    #[track_caller]
    pub fn error_exception<E>(&self, message: impl Into<String>, error: &E)
    where
        E: std::error::Error + ?Sized,
    {
        self.log_exception(LogLevel::Error, message, error);
    }

    /// Log at CRITICAL with the error's type, message and trace attached
    #[track_caller]
    pub fn critical_exception<E>(&self, message: impl Into<String>, error: &E)
    where
        E: std::error::Error + ?Sized,
    {
        self.log_exception(LogLevel::Critical, message, error);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("log_type", &self.log_type)
            .field("min_level", &self.min_level)
            .field("formatter", &self.formatter.name())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.sink.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush logger '{}' on drop: {}", self.name, e);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger '{}' shutting down with {} dropped logs (drop rate: {:.2}%)",
                self.name,
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_logger_facade::prelude::*;
///
/// let result = Logger::builder("orders")
///     .log_type(LogType::Remote)
///     .build();
/// assert!(result.unwrap_err().is_configuration());
/// ```
pub struct LoggerBuilder {
    name: String,
    log_type: LogType,
    connection_string: Option<String>,
    credential: Option<Arc<dyn Credential>>,
    min_level: LogLevel,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    console: Option<Box<dyn Sink>>,
    telemetry_client: Option<Box<dyn TelemetryClient>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values (local mode, all levels)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log_type: LogType::Local,
            connection_string: None,
            credential: None,
            min_level: LogLevel::Debug,
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::default(),
            console: None,
            telemetry_client: None,
        }
    }

    /// Create a builder whose mode, connection string and level come from settings
    pub fn from_settings(name: impl Into<String>, settings: &Settings) -> Self {
        let mut builder = Self::new(name)
            .log_type(settings.log_type())
            .min_level(settings.min_level());
        builder.connection_string = settings.connection_string.clone();
        builder
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_type(mut self, log_type: LogType) -> Self {
        self.log_type = log_type;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn credential<C: Credential + 'static>(self, credential: C) -> Self {
        self.shared_credential(Arc::new(credential))
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_credential(mut self, credential: Arc<dyn Credential>) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Color the level in local mode
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Timestamp format for local mode
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace stdout as the console stream of a local logger
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console = Some(Box::new(ConsoleSink::new(writer)));
        self
    }

    /// Telemetry client used to attach a remote logger
    ///
    /// Defaults to [`StdoutTelemetryClient`](crate::telemetry::StdoutTelemetryClient)
    /// when the `remote` feature is enabled.
    #[must_use = "builder methods return a new value"]
    pub fn telemetry_client<C: TelemetryClient + 'static>(mut self, client: C) -> Self {
        self.telemetry_client = Some(Box::new(client));
        self
    }

    /// Build the Logger
    ///
    /// Remote loggers attach their telemetry client here, once.
    pub fn build(self) -> Result<Logger> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::config("Logger", "name must not be empty"));
        }

        let (formatter, sink): (Box<dyn Formatter>, Box<dyn Sink>) = match self.log_type {
            LogType::Local => {
                let formatter = LocalFormatter::new()
                    .with_colors(self.use_colors)
                    .with_timestamp_format(self.timestamp_format);
                let sink = self
                    .console
                    .unwrap_or_else(|| Box::new(ConsoleSink::stdout()) as Box<dyn Sink>);
                (Box::new(formatter), sink)
            }
            LogType::Remote => {
                let auth = RemoteAuth::resolve(self.connection_string.as_deref(), self.credential)?;
                let client = match self.telemetry_client {
                    Some(client) => client,
                    None => default_telemetry_client()?,
                };
                (Box::new(RemoteFormatter::new()), client.attach(&auth)?)
            }
        };

        Ok(Logger {
            name: self.name,
            log_type: self.log_type,
            min_level: self.min_level,
            formatter,
            sink: Mutex::new(sink),
            metrics: LoggerMetrics::new(),
        })
    }
}

#[cfg(feature = "remote")]
fn default_telemetry_client() -> Result<Box<dyn TelemetryClient>> {
    Ok(Box::new(crate::telemetry::StdoutTelemetryClient::new()))
}

#[cfg(not(feature = "remote"))]
fn default_telemetry_client() -> Result<Box<dyn TelemetryClient>> {
    Err(LoggerError::config(
        "Logger",
        "remote logging needs the `remote` feature or an injected telemetry client",
    ))
}
