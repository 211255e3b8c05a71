//! Bridge from external logging subsystems into a [`Logger`]
//!
//! An external record carries its own severity scale and an already
//! formatted message. The bridge maps the severity onto [`LogLevel`] and
//! hands the text to [`Logger::dispatch`] untouched, so `{}` inside a bridged
//! message is never treated as a placeholder.
//!
//! The `log` crate is supported out of the box:
//!
//! ```no_run
//! use rust_log_facade::{bridge::register_log_bridge, Logger};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(Logger::new());
//! register_log_bridge(Arc::clone(&logger)).expect("no other global logger");
//!
//! log::warn!("cache miss for {}", "index.json");
//! ```

use crate::core::{LogLevel, Logger, Result};
use std::sync::Arc;

/// Severity scale of an external logging subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalSeverity {
    Critical,
    Warning,
    Info,
    ConfigNotice,
    FineDetail,
    /// Anything more verbose than fine detail.
    Other,
}

impl ExternalSeverity {
    pub fn to_level(self) -> LogLevel {
        match self {
            ExternalSeverity::Critical => LogLevel::Error,
            ExternalSeverity::Warning => LogLevel::Warn,
            ExternalSeverity::Info => LogLevel::Info,
            ExternalSeverity::ConfigNotice => LogLevel::Debug,
            ExternalSeverity::FineDetail => LogLevel::Trace,
            ExternalSeverity::Other => LogLevel::DeepTrace,
        }
    }
}

impl From<log::Level> for ExternalSeverity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => ExternalSeverity::Critical,
            log::Level::Warn => ExternalSeverity::Warning,
            log::Level::Info => ExternalSeverity::Info,
            log::Level::Debug => ExternalSeverity::ConfigNotice,
            log::Level::Trace => ExternalSeverity::FineDetail,
        }
    }
}

/// A single record produced by an external logging subsystem.
pub trait ExternalRecord {
    fn severity(&self) -> ExternalSeverity;

    /// Fully resolved message text.
    fn message(&self) -> String;
}

impl ExternalRecord for log::Record<'_> {
    fn severity(&self) -> ExternalSeverity {
        self.level().into()
    }

    fn message(&self) -> String {
        self.args().to_string()
    }
}

/// Destination for external records.
pub trait BridgeHandler: Send + Sync {
    fn handle(&self, record: &dyn ExternalRecord);
}

impl BridgeHandler for Logger {
    fn handle(&self, record: &dyn ExternalRecord) {
        self.dispatch(record.severity().to_level(), &record.message());
    }
}

/// [`log::Log`] implementation forwarding every record to a [`Logger`].
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        let level = ExternalSeverity::from(metadata.level()).to_level();
        self.logger.is_enabled(level)
    }

    fn log(&self, record: &log::Record<'_>) {
        self.logger.handle(record);
    }

    fn flush(&self) {}
}

/// Install `logger` as the global destination of the `log` crate.
///
/// Fails if another global logger is already installed.
pub fn register_log_bridge(logger: Arc<Logger>) -> Result<()> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
