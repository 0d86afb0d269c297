//! Remote logging example
//!
//! Demonstrates the JSON line format sent to the telemetry backend, both
//! authentication modes and the configuration errors raised at construction.
//! The default telemetry client writes its lines to stdout.
//!
//! Run with: cargo run --example remote_logging

use rust_logger_facade::config::Settings;
use rust_logger_facade::prelude::*;

const CONNECTION_STRING: &str =
    "InstrumentationKey=00000000-0000-0000-0000-000000000000;IngestionEndpoint=https://example.invalid/";

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Remote Logging Example ===\n");

    println!("1. Connection string authentication:");
    let logger = Logger::remote("orders", CONNECTION_STRING)?;
    logger.info("order placed");
    logger.error("payment declined");

    println!("\n2. Credential authentication:");
    let logger = Logger::builder("orders")
        .log_type(LogType::Remote)
        .credential(StaticCredential::new("demo-token"))
        .build()?;
    logger.warning("inventory below threshold");

    println!("\n3. Configuration from the environment:");
    let settings = Settings::from_env()?;
    println!("   {:?}", settings.log_type());
    match LoggerBuilder::from_settings("configured", &settings).build() {
        Ok(logger) => logger.info("built from environment"),
        Err(e) => println!("   configuration error: {}", e),
    }

    println!("\n4. Missing authentication is rejected:");
    if let Err(e) = Logger::builder("orders").log_type(LogType::Remote).build() {
        println!("   {}", e);
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
