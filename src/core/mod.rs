//! Core logger types and traits

pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod log_type;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_level::LogLevel;
pub use log_record::{CallSite, ExceptionInfo, LogRecord};
pub use log_type::LogType;
pub use logger::{Logger, LoggerBuilder};
pub use message::interpolate;
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
