//! Console sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::io::{self, Write};

/// Writes each line to a console stream and flushes it immediately.
///
/// The default stream is the process's stdout. Any other `Write` can stand
/// in for it, which is how tests capture output.
///
/// # Example
///
/// ```
/// use rust_logger_facade::sinks::ConsoleSink;
/// use rust_logger_facade::Sink;
///
/// let mut sink = ConsoleSink::new(Vec::new());
/// sink.write_line("hello").unwrap();
/// assert_eq!(sink.into_inner(), b"hello\n");
/// ```
pub struct ConsoleSink<W: Write + Send = io::Stdout> {
    writer: W,
    name: String,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "console".to_string(),
        }
    }

    /// Rename the sink as reported in errors
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');

        self.writer
            .write_all(&buf)
            .and_then(|()| self.writer.flush())
            .map_err(|e| LoggerError::sink_write(self.name.clone(), e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::sink_write(self.name.clone(), e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_lines_are_newline_terminated() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_write_failure_names_the_sink() {
        let mut sink = ConsoleSink::new(BrokenPipe).named("telemetry");
        let err = sink.write_line("lost").unwrap_err();

        assert!(matches!(err, LoggerError::SinkWrite { ref sink, .. } if sink == "telemetry"));
    }
}
