//! Log record structure

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::Location;
use std::path::Path;

/// Where a log call was made from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub func: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(func: &'static str, file: &'static str, line: u32) -> Self {
        Self { func, file, line }
    }

    /// Capture the location of the caller.
    ///
    /// Rust has no runtime function names, so `func` is the stem of the
    /// caller's source file. Use the `call_site!` macro to record the
    /// enclosing function instead.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        let file = location.file();
        let func = Path::new(file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file);

        Self {
            func,
            file,
            line: location.line(),
        }
    }
}

/// Error details attached to records logged from an error-handling path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionInfo {
    pub kind: String,
    pub message: String,
    pub trace: String,
}

impl ExceptionInfo {
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        trace: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            trace: trace.into(),
        }
    }

    /// Capture an error's type, message, source chain and (when enabled
    /// through `RUST_BACKTRACE`) a backtrace of the logging call.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut trace = String::new();
        let mut source = error.source();
        while let Some(cause) = source {
            trace.push_str("Caused by: ");
            trace.push_str(&cause.to_string());
            trace.push('\n');
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            trace.push_str(&backtrace.to_string());
        }

        Self {
            kind: error_kind(error),
            message: error.to_string(),
            trace: trace.trim_end().to_string(),
        }
    }
}

/// Short type name of an error, e.g. `ParseIntError`.
///
/// Trait objects carry no concrete type name, so for `dyn Error` the name is
/// taken from the leading identifier of the `Debug` output.
fn error_kind<E>(error: &E) -> String
where
    E: std::error::Error + ?Sized,
{
    let full = std::any::type_name::<E>();
    if !full.starts_with("dyn ") {
        let path = full.split('<').next().unwrap_or(full);
        return path.rsplit("::").next().unwrap_or(path).to_string();
    }

    let debug = format!("{:?}", error);
    let ident: String = debug
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if ident.is_empty() {
        "Error".to_string()
    } else {
        ident
    }
}

/// One log event, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub name: String,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub func: String,
    pub file: String,
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<ExceptionInfo>,
}

impl LogRecord {
    pub fn new(
        name: impl Into<String>,
        level: LogLevel,
        message: impl Into<String>,
        site: CallSite,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            message: message.into(),
            timestamp: Utc::now(),
            func: site.func.to_string(),
            file: site.file.to_string(),
            line: site.line,
            exception: None,
        }
    }

    pub fn with_exception(mut self, exception: ExceptionInfo) -> Self {
        self.exception = Some(exception);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Override the source line, e.g. for records rebuilt from another system
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Check the structural constraints every emitted record must meet
    pub fn validate(&self) -> Result<()> {
        if self.line == 0 {
            return Err(LoggerError::validation(
                "line",
                "must be a positive integer, got 0",
            ));
        }
        Ok(())
    }
}
