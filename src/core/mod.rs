//! Core logger types and traits

pub mod channel;
pub mod error;
pub mod layout;
pub mod log_level;
pub mod log_message;
pub mod logger;
pub mod metrics;
pub mod placeholder;
pub mod sink;
pub mod timestamp;

pub use channel::{Channel, Submission};
pub use error::{LoggerError, Result};
pub use layout::{render_columns, shorten, Column, ColumnWidth, LINE_SEPARATOR};
pub use log_level::LogLevel;
pub use log_message::LogMessage;
pub use logger::{describe_failure, Logger, LoggerBuilder, DEFAULT_THREAD_COLUMN_WIDTH};
pub use metrics::LoggerMetrics;
pub use placeholder::{format_placeholders, PLACEHOLDER_OVERFLOW};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
