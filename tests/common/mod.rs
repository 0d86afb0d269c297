//! Shared utilities for logger and timer tests.

#![allow(dead_code)]

use parking_lot::Mutex;
use rust_logger_facade::prelude::*;
use std::io;
use std::sync::Arc;

pub const CONNECTION_STRING: &str = "InstrumentationKey=00000000-0000-0000-0000-000000000000;IngestionEndpoint=https://test.ingest.example/";

/// In-memory console stream that can be inspected after logging.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Telemetry client whose "transport" is a [`Captured`] buffer.
pub struct CapturingClient {
    pub output: Captured,
    pub attach_calls: Arc<Mutex<usize>>,
}

impl CapturingClient {
    pub fn new(output: &Captured) -> Self {
        Self {
            output: output.clone(),
            attach_calls: Arc::new(Mutex::new(0)),
        }
    }
}

impl TelemetryClient for CapturingClient {
    fn attach(&self, _auth: &RemoteAuth) -> Result<Box<dyn Sink>> {
        *self.attach_calls.lock() += 1;
        Ok(Box::new(
            ConsoleSink::new(self.output.clone()).named("telemetry"),
        ))
    }

    fn name(&self) -> &str {
        "capturing"
    }
}

pub fn local_logger(name: &str, output: &Captured) -> Logger {
    Logger::builder(name)
        .colors(false)
        .console_writer(output.clone())
        .build()
        .expect("local logger")
}

pub fn remote_logger(name: &str, output: &Captured) -> Logger {
    Logger::builder(name)
        .log_type(LogType::Remote)
        .connection_string(CONNECTION_STRING)
        .telemetry_client(CapturingClient::new(output))
        .build()
        .expect("remote logger")
}
