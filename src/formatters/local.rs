//! Human-readable console formatter

use crate::core::{Formatter, LogRecord, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;

/// Formats records as `[timestamp] LEVEL    name: message`.
///
/// The message is written verbatim. Exception details, when present, follow
/// on the next lines.
#[derive(Debug, Clone)]
pub struct LocalFormatter {
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl LocalFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Enable or disable level coloring (no effect without the `console` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the timestamp format for this formatter
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_facade::{LocalFormatter, TimestampFormat};
    ///
    /// let formatter = LocalFormatter::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn level_label(&self, record: &LogRecord) -> String {
        let padded = format!("{:8}", record.level);

        #[cfg(feature = "console")]
        if self.use_colors {
            return padded.color(record.level.color_code()).to_string();
        }

        padded
    }
}

impl Default for LocalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for LocalFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let mut line = format!(
            "[{}] {} {}: {}",
            self.timestamp_format.format(&record.timestamp),
            self.level_label(record),
            record.name,
            record.message
        );

        if let Some(ref exception) = record.exception {
            line.push('\n');
            line.push_str(&exception.kind);
            line.push_str(": ");
            line.push_str(&exception.message);
            if !exception.trace.is_empty() {
                line.push('\n');
                line.push_str(&exception.trace);
            }
        }

        Ok(line)
    }

    fn name(&self) -> &str {
        "local"
    }
}
