//! Timing example
//!
//! Demonstrates scoped timers, wrapped functions and the `timed!` macro.
//!
//! Run with: cargo run --example timing

use rust_logger_facade::prelude::*;
use rust_logger_facade::timed;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Timing Example ===\n");

    let logger = Arc::new(Logger::new("timing")?);

    println!("1. Scoped timer:");
    {
        let _span = Timer::new("load config").with_logger(Arc::clone(&logger)).scope();
        thread::sleep(Duration::from_millis(50));
    }

    println!("\n2. Wrapped function, one span per call:");
    let fetch = Timer::new("fetch")
        .with_logger(Arc::clone(&logger))
        .decorate_with(|id: u32| {
            thread::sleep(Duration::from_millis(10 * u64::from(id)));
            format!("record {}", id)
        });
    for id in 1..=3 {
        logger.info(fetch(id));
    }

    println!("\n3. Nested spans:");
    let outer = Timer::new("outer").with_logger(Arc::clone(&logger)).scope();
    let inner = Timer::new("inner").with_logger(Arc::clone(&logger)).measure(|| {
        thread::sleep(Duration::from_millis(20));
        "inner done"
    });
    let outer = outer.finish();
    println!("   {} / outer took {:?} seconds", inner, outer.duration());

    println!("\n4. Macro with the default timer logger:");
    let total = timed!("sum", { (1..=1_000_000u64).sum::<u64>() });
    println!("   sum = {}", total);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
