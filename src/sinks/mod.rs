//! Sink implementations

pub mod console;

pub use console::ConsoleSink;

// Re-export the trait next to its implementations
pub use crate::core::Sink;
