//! Wall-clock timing of scoped blocks and function calls
//!
//! Both entry points share one span primitive, [`Timer::begin_span`] and
//! [`Timer::end_span`]:
//!
//! - scoped: [`Timer::scope`] returns a [`TimerGuard`] that ends the span when
//!   dropped, including while a panic unwinds
//! - wrapping: [`Timer::measure`] times one call; [`Timer::decorate`] and
//!   [`Timer::decorate_with`] return a closure that times every call in a
//!   fresh span
//!
//! Ending a span logs one INFO line, `"<label> took <seconds> seconds"`,
//! through the injected logger or the process-wide default timer logger.
//!
//! # Examples
//!
//! ```
//! use rust_logger_facade::Timer;
//!
//! {
//!     let _span = Timer::new("load config").scope();
//!     // ... work ...
//! }
//!
//! let parse = Timer::new("parse").decorate_with(|s: &str| s.len());
//! assert_eq!(parse("hello"), 5);
//! ```

use crate::config::Settings;
use crate::core::{CallSite, LogLevel, Logger, LoggerBuilder};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// Name of the logger timers use when none is injected
pub const DEFAULT_TIMER_LOGGER: &str = "timer";

static DEFAULT_LOGGER: OnceLock<Option<Arc<Logger>>> = OnceLock::new();

/// Process-wide logger used by timers without an injected one.
///
/// Built on first use from [`Settings::from_env`]. A remote logger that
/// cannot be built falls back to local output.
pub fn default_logger() -> Option<Arc<Logger>> {
    DEFAULT_LOGGER.get_or_init(build_default_logger).clone()
}

fn build_default_logger() -> Option<Arc<Logger>> {
    let settings = Settings::from_env().unwrap_or_else(|e| {
        eprintln!("[LOGGER WARNING] Ignoring invalid timer settings: {}", e);
        Settings::default()
    });

    let logger = LoggerBuilder::from_settings(DEFAULT_TIMER_LOGGER, &settings)
        .build()
        .or_else(|e| {
            eprintln!(
                "[LOGGER WARNING] Timer logger falls back to local output: {}",
                e
            );
            Logger::builder(DEFAULT_TIMER_LOGGER)
                .min_level(settings.min_level())
                .build()
        });

    match logger {
        Ok(logger) => Some(Arc::new(logger)),
        Err(e) => {
            eprintln!("[LOGGER ERROR] Timer logging disabled: {}", e);
            None
        }
    }
}

/// Measures one operation.
///
/// `duration` is only available once the span has ended. Use a fresh timer
/// per operation; [`Timer::decorate`] does this for every call.
#[derive(Debug)]
pub struct Timer {
    label: String,
    logger: Option<Arc<Logger>>,
    site: CallSite,
    start: Option<Instant>,
    end: Option<Instant>,
}

impl Timer {
    #[track_caller]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            logger: None,
            site: CallSite::caller(),
            start: None,
            end: None,
        }
    }

    /// Report through `logger` instead of the default timer logger
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Start (or restart) the span
    pub fn begin_span(&mut self) {
        self.start = Some(Instant::now());
        self.end = None;
    }

    /// End the span and report it.
    ///
    /// Returns `None` if the span was never started. Ending an already ended
    /// span returns its duration again without logging a second line.
    pub fn end_span(&mut self) -> Option<Duration> {
        let start = self.start?;
        if let Some(end) = self.end {
            return Some(end - start);
        }

        let end = Instant::now();
        self.end = Some(end);
        let elapsed = end - start;
        self.report(elapsed);
        Some(elapsed)
    }

    pub fn is_running(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Time since the span started, up to its end if it has ended
    pub fn elapsed(&self) -> Option<Duration> {
        let start = self.start?;
        Some(self.end.unwrap_or_else(Instant::now) - start)
    }

    /// Duration of the completed span in seconds
    pub fn duration(&self) -> Option<f64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((end - start).as_secs_f64()),
            _ => None,
        }
    }

    /// Start the span; it ends when the returned guard is dropped
    pub fn scope(mut self) -> TimerGuard {
        self.begin_span();
        TimerGuard { timer: Some(self) }
    }

    /// Time a single call, passing its result through
    pub fn measure<R, F>(self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = self.scope();
        f()
    }

    /// Wrap `f` so that every call is timed in its own span
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_facade::Timer;
    ///
    /// let work = Timer::new("work").decorate(|| "done");
    /// assert_eq!(work(), "done");
    /// assert_eq!(work(), "done");
    /// ```
    pub fn decorate<R, F>(self, f: F) -> impl Fn() -> R
    where
        F: Fn() -> R,
    {
        move || self.fresh().measure(&f)
    }

    /// Like [`Timer::decorate`] for functions taking one argument (use a
    /// tuple for several)
    pub fn decorate_with<A, R, F>(self, f: F) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        move |arg| self.fresh().measure(|| f(arg))
    }

    /// Unstarted copy sharing label, logger and call site
    fn fresh(&self) -> Self {
        Self {
            label: self.label.clone(),
            logger: self.logger.clone(),
            site: self.site,
            start: None,
            end: None,
        }
    }

    fn report(&self, elapsed: Duration) {
        let message = format!("{} took {:.6} seconds", self.label, elapsed.as_secs_f64());

        match self.logger {
            Some(ref logger) => logger.log_at(LogLevel::Info, message, self.site),
            None => {
                if let Some(logger) = default_logger() {
                    logger.log_at(LogLevel::Info, message, self.site);
                }
            }
        }
    }
}

/// Ends its timer's span when dropped
#[must_use = "the span ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct TimerGuard {
    timer: Option<Timer>,
}

impl TimerGuard {
    pub fn label(&self) -> &str {
        self.timer.as_ref().map(Timer::label).unwrap_or_default()
    }

    /// Time since the span started
    pub fn elapsed(&self) -> Duration {
        self.timer
            .as_ref()
            .and_then(Timer::elapsed)
            .unwrap_or_default()
    }

    /// End the span now and hand back the completed timer
    pub fn finish(mut self) -> Timer {
        let mut timer = self
            .timer
            .take()
            .expect("timer present until the guard is consumed");
        timer.end_span();
        timer
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.end_span();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::thread;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock())
                .lines()
                .map(str::to_string)
                .collect()
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

    fn logger(captured: &Captured) -> Arc<Logger> {
        Arc::new(
            Logger::builder("timing")
                .colors(false)
                .console_writer(captured.clone())
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_duration_unavailable_until_end() {
        let captured = Captured::default();
        let mut timer = Timer::new("op").with_logger(logger(&captured));
        assert_eq!(timer.duration(), None);
        assert_eq!(timer.end_span(), None);

        timer.begin_span();
        assert!(timer.is_running());
        assert_eq!(timer.duration(), None);

        timer.end_span();
        assert!(!timer.is_running());
        assert!(timer.duration().is_some());
        assert_eq!(captured.lines().len(), 1);
    }

    #[test]
    fn test_end_span_twice_logs_once() {
        let captured = Captured::default();
        let mut timer = Timer::new("op").with_logger(logger(&captured));

        timer.begin_span();
        let first = timer.end_span();
        let second = timer.end_span();

        assert_eq!(first, second);
        assert_eq!(captured.lines().len(), 1);
    }

    #[test]
    fn test_report_line_is_info() {
        let captured = Captured::default();
        Timer::new("load config")
            .with_logger(logger(&captured))
            .measure(|| ());

        let lines = captured.lines();
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("timing: load config took "));
        assert!(lines[0].ends_with(" seconds"));
    }

    #[test]
    fn test_guard_finish_returns_completed_timer() {
        let captured = Captured::default();
        let guard = Timer::new("scoped").with_logger(logger(&captured)).scope();
        assert_eq!(guard.label(), "scoped");

        thread::sleep(Duration::from_millis(5));
        let timer = guard.finish();

        assert!(timer.duration().unwrap() >= 0.005);
        assert_eq!(captured.lines().len(), 1);
    }

    #[test]
    fn test_decorate_uses_fresh_span_per_call() {
        let captured = Captured::default();
        let double = Timer::new("double")
            .with_logger(logger(&captured))
            .decorate_with(|x: u32| x * 2);

        assert_eq!(double(2), 4);
        assert_eq!(double(21), 42);
        assert_eq!(captured.lines().len(), 2);
    }
}
