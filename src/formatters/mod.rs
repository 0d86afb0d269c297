//! Formatter implementations

pub mod local;
pub mod remote;

pub use local::LocalFormatter;
pub use remote::{RemoteFormatter, RemoteRecord};

// Re-export the trait next to its implementations
pub use crate::core::Formatter;
