//! Formatter trait for turning records into output lines

use super::{error::Result, log_record::LogRecord};

/// Converts a [`LogRecord`] into one output-ready string.
///
/// A logger owns exactly one formatter, chosen when it is built.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<String>;
    fn name(&self) -> &str;
}
