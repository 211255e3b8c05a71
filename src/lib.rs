//! # Rust Log Facade
//!
//! A lightweight logging facade meant to be embedded in a larger process.
//!
//! ## Features
//!
//! - **Deferred Sinks**: Messages logged before a sink is attached are queued
//!   and delivered in order once it is
//! - **Two Channels**: Independent output and error pathways
//! - **Aligned Output**: Thread and message columns wrapped and aligned
//! - **Bridge**: Records from the `log` crate are forwarded into the facade

pub mod bridge;
pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::bridge::{register_log_bridge, ExternalSeverity, LogBridge};
    pub use crate::core::{
        Channel, LogLevel, LogMessage, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result,
        Sink, TimestampFormat,
    };
    pub use crate::sinks::ConsoleSink;
}

pub use bridge::{register_log_bridge, ExternalSeverity, LogBridge};
pub use core::{
    Channel, LogLevel, LogMessage, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Sink,
    TimestampFormat,
};
pub use sinks::ConsoleSink;
