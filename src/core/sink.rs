//! Sink trait for log output destinations

use super::error::Result;

/// Destination for formatted log lines.
///
/// `write_line` receives one line without its terminator and must write it
/// as a single unit.
pub trait Sink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
