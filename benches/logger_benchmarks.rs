//! Criterion benchmarks for rust_logger_facade

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logger_facade::core::interpolate;
use rust_logger_facade::prelude::*;
use std::io;
use std::sync::Arc;

fn quiet_local() -> Logger {
    Logger::builder("bench")
        .colors(false)
        .console_writer(io::sink())
        .build()
        .unwrap()
}

struct SinkClient;

impl TelemetryClient for SinkClient {
    fn attach(&self, _auth: &RemoteAuth) -> Result<Box<dyn Sink>> {
        Ok(Box::new(ConsoleSink::new(io::sink()).named("telemetry")))
    }

    fn name(&self) -> &str {
        "sink"
    }
}

fn quiet_remote() -> Logger {
    Logger::builder("bench")
        .log_type(LogType::Remote)
        .connection_string("InstrumentationKey=bench")
        .telemetry_client(SinkClient)
        .build()
        .unwrap()
}

fn sample_record() -> LogRecord {
    LogRecord::new(
        "bench",
        LogLevel::Info,
        "request completed in 12ms",
        CallSite::new("handle", "src/server.rs", 42),
    )
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let record = sample_record();
    let local = LocalFormatter::new().with_colors(false);
    let remote = RemoteFormatter::new();

    group.bench_function("local", |b| {
        b.iter(|| local.format(black_box(&record)).unwrap());
    });

    group.bench_function("remote_json", |b| {
        b.iter(|| remote.format(black_box(&record)).unwrap());
    });

    group.bench_function("interpolate", |b| {
        b.iter(|| interpolate(black_box("user {} logged in from {}"), &[&42, &"10.0.0.1"]));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let local = quiet_local();
    let remote = quiet_remote();
    let filtered = Logger::builder("bench")
        .min_level(LogLevel::Error)
        .console_writer(io::sink())
        .build()
        .unwrap();

    group.bench_function("local_info", |b| {
        b.iter(|| local.info(black_box("Info message")));
    });

    group.bench_function("remote_info", |b| {
        b.iter(|| remote.info(black_box("Info message")));
    });

    group.bench_function("filtered_debug", |b| {
        b.iter(|| filtered.debug(black_box("Debug message")));
    });

    group.finish();
}

// ============================================================================
// Timer Benchmarks
// ============================================================================

fn bench_timer(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer");
    group.throughput(Throughput::Elements(1));

    let logger = Arc::new(quiet_local());

    group.bench_function("scope", |b| {
        b.iter(|| {
            let _span = Timer::new("bench").with_logger(Arc::clone(&logger)).scope();
            black_box(1 + 1)
        });
    });

    let decorated = Timer::new("bench")
        .with_logger(Arc::clone(&logger))
        .decorate_with(|x: u64| x.wrapping_mul(31));

    group.bench_function("decorated_call", |b| {
        b.iter(|| decorated(black_box(7)));
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_logging, bench_timer);
criterion_main!(benches);
