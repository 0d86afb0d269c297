//! Basic logger usage example
//!
//! Demonstrates local console logging at every level, positional message
//! arguments, the formatting macros and attaching an error.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_facade::prelude::*;
use rust_logger_facade::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Basic Usage Example ===\n");

    let logger = Logger::new("basic_usage")?;

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    println!("\n2. Minimum level INFO - debug won't show:");
    let quiet = Logger::builder("basic_usage")
        .min_level(LogLevel::Info)
        .build()?;
    quiet.debug("Debug message (hidden)");
    quiet.info("Info message (visible)");

    println!("\n3. Positional arguments:");
    logger.log_args(LogLevel::Info, "user {} logged in from {}", &[&42, &"10.0.0.1"]);
    logger.log_args(LogLevel::Info, "{1} before {0}", &[&"second", &"first"]);

    println!("\n4. Formatting macros:");
    let port = 8080;
    info!(logger, "Server listening on port {}", port);
    warning!(logger, "Retry attempt {} of {}", 3, 5);

    println!("\n5. Logging an error:");
    let err = "not a number".parse::<u32>().unwrap_err();
    logger.error_exception("failed to parse port", &err);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
