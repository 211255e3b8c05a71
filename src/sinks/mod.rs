//! Ready-made sink implementations

pub mod console;

pub use console::{ConsoleSink, ConsoleStream};

// Re-export the trait next to its implementations
pub use crate::core::Sink;
