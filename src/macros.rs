//! Logging macros for ergonomic log message formatting.
//!
//! These macros format like `format!` and record the enclosing function
//! name, which the plain [`Logger`](crate::Logger) methods cannot see.
//!
//! # Examples
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::info;
//!
//! let logger = Logger::new("server").unwrap();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Name of the enclosing function, without its module path.
///
/// Closures report the function they are defined in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let mut name = __type_name_of(__here);
        name = name.strip_suffix("::__here").unwrap_or(name);
        while let Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// [`CallSite`](crate::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::function_name!(), file!(), line!())
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = Logger::new("demo").unwrap();
/// use rust_logger_facade::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let level = $level;
        let logger = &$logger;
        if logger.is_enabled(level) {
            logger.log_at(level, format!($($arg)+), $crate::call_site!())
        }
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = Logger::new("demo").unwrap();
/// use rust_logger_facade::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = Logger::new("demo").unwrap();
/// use rust_logger_facade::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Time a block and log its duration when the block exits.
///
/// ```
/// use rust_logger_facade::timed;
///
/// let total = timed!("sum", {
///     (1..=10).sum::<u32>()
/// });
/// assert_eq!(total, 55);
/// ```
#[macro_export]
macro_rules! timed {
    ($label:expr, logger = $logger:expr, $block:block) => {{
        let _timer_guard = $crate::Timer::new($label).with_logger($logger).scope();
        $block
    }};
    ($label:expr, $block:block) => {{
        let _timer_guard = $crate::Timer::new($label).scope();
        $block
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};

    fn quiet() -> Logger {
        Logger::builder("macros")
            .console_writer(std::io::sink())
            .build()
            .unwrap()
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name!(), "test_function_name");

        let from_closure = || function_name!();
        assert_eq!(from_closure(), "test_function_name");
    }

    #[test]
    fn test_call_site() {
        let site = call_site!();
        assert_eq!(site.func, "test_call_site");
        assert!(site.file.ends_with("macros.rs"));
        assert_eq!(site.line, line!() - 3);
    }

    #[test]
    fn test_level_macros() {
        let logger = quiet();
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        critical!(logger, "Critical failure: {}", "system");

        assert_eq!(logger.metrics().total_logged(), 6);
    }

    #[test]
    fn test_disabled_level_skips_formatting() {
        let logger = Logger::builder("macros")
            .min_level(LogLevel::Error)
            .console_writer(std::io::sink())
            .build()
            .unwrap();

        let mut evaluated = false;
        debug!(logger, "{}", {
            evaluated = true;
            "expensive"
        });

        assert!(!evaluated);
        assert_eq!(logger.metrics().total_logged(), 0);
    }
}
