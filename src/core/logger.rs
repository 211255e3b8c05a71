//! Main logger implementation

use super::{
    channel::{Channel, ChannelSlot, Submission},
    layout::{render_columns, Column},
    log_level::LogLevel,
    log_message::{current_thread_label, LogMessage},
    metrics::LoggerMetrics,
    placeholder::{substitute, Substitution},
    sink::Sink,
    timestamp::TimestampFormat,
};
use parking_lot::RwLock;
use std::error::Error;
use std::fmt::{Display, Write};
use std::sync::Arc;

/// Default width of the thread column
pub const DEFAULT_THREAD_COLUMN_WIDTH: usize = 10;

/// Logging facade with deferred sink attachment.
///
/// Messages produced before a sink is connected are queued per channel and
/// handed over, in order, the moment one is.
///
/// ```
/// use rust_log_facade::prelude::*;
/// use std::sync::{Arc, Mutex};
///
/// let logger = Logger::new();
/// logger.info("indexed {} files", &[&42]);
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let target = Arc::clone(&seen);
/// logger.connect_output_sink(move |msg: LogMessage| {
///     target.lock().unwrap().push(msg.into_message());
/// });
///
/// assert!(seen.lock().unwrap()[0].ends_with("indexed 42 files\n"));
/// ```
pub struct Logger {
    threshold: RwLock<LogLevel>,
    output: ChannelSlot,
    error: ChannelSlot,
    timestamps: Option<TimestampFormat>,
    thread_column_width: usize,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: RwLock::new(LogLevel::default()),
            output: ChannelSlot::new(),
            error: ChannelSlot::new(),
            timestamps: None,
            thread_column_width: DEFAULT_THREAD_COLUMN_WIDTH,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_threshold(&self, level: LogLevel) {
        *self.threshold.write() = level;
    }

    pub fn threshold(&self) -> LogLevel {
        *self.threshold.read()
    }

    /// Whether a message at `level` would currently be emitted.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_observable_under(self.threshold())
    }

    /// Log `template` at `level`, replacing each `{}` with the next argument.
    pub fn log(&self, level: LogLevel, template: &str, args: &[&dyn Display]) {
        if !self.admit(level) {
            return;
        }

        let text = match substitute(template, args) {
            Substitution::Complete(text) => text,
            overflow @ Substitution::Overflow => {
                self.metrics.record_placeholder_overflow();
                overflow.into_text()
            }
        };
        self.emit(Channel::Output, level, &text);
    }

    #[inline]
    pub fn deep_trace(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::DeepTrace, template, args);
    }

    #[inline]
    pub fn trace(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Trace, template, args);
    }

    #[inline]
    pub fn debug(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Debug, template, args);
    }

    #[inline]
    pub fn info(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Info, template, args);
    }

    #[inline]
    pub fn warn(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Warn, template, args);
    }

    #[inline]
    pub fn error(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Error, template, args);
    }

    /// Emit already-resolved text on the output channel.
    ///
    /// No placeholder substitution is performed, so `{}` in `text` is kept.
    pub fn dispatch(&self, level: LogLevel, text: &str) {
        if self.admit(level) {
            self.emit(Channel::Output, level, text);
        }
    }

    /// Report a caught failure on the error channel.
    ///
    /// The rendered text is the failure followed by one `Caused by:` line per
    /// entry in its source chain.
    pub fn report(&self, failure: &dyn Error) {
        if self.admit(LogLevel::Error) {
            self.emit(Channel::Error, LogLevel::Error, &describe_failure(failure));
        }
    }

    /// Report pre-rendered diagnostic text (a backtrace, a panic message) on
    /// the error channel.
    pub fn report_trace(&self, trace: &str) {
        if self.admit(LogLevel::Error) {
            self.emit(Channel::Error, LogLevel::Error, trace);
        }
    }

    /// Attach the output sink, draining queued messages into it.
    pub fn connect_output_sink<S: Sink + 'static>(&self, sink: S) {
        self.connect_sink(Channel::Output, Arc::new(sink));
    }

    /// Attach the error sink, draining queued messages into it.
    pub fn connect_error_sink<S: Sink + 'static>(&self, sink: S) {
        self.connect_sink(Channel::Error, Arc::new(sink));
    }

    /// Attach `sink` to `channel`, replacing any previous sink.
    ///
    /// Returns the number of queued messages handed to the new sink. The sink
    /// may log while it drains; those messages are queued behind the rest.
    /// Messages logged after this returns go to the new sink only, though a
    /// delivery already in progress on another thread still finishes on the
    /// previous one.
    pub fn connect_sink(&self, channel: Channel, sink: Arc<dyn Sink>) -> usize {
        let drained = self.slot(channel).attach(sink);
        self.metrics.record_drained(drained);
        drained
    }

    /// Number of messages queued on `channel` waiting for a sink.
    pub fn pending(&self, channel: Channel) -> usize {
        self.slot(channel).pending()
    }

    pub fn is_attached(&self, channel: Channel) -> bool {
        self.slot(channel).is_attached()
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Lay out `message` as it would appear in a delivered [`LogMessage`].
    pub fn render(&self, message: &str) -> String {
        let mut columns = Vec::with_capacity(3);
        if let Some(format) = &self.timestamps {
            columns.push(Column::natural(format.now()));
        }
        columns.push(Column::fixed(&current_thread_label(), self.thread_column_width));
        columns.push(Column::natural(message));
        render_columns(&columns)
    }

    fn admit(&self, level: LogLevel) -> bool {
        let admitted = self.is_enabled(level);
        if !admitted {
            self.metrics.record_filtered();
        }
        admitted
    }

    fn emit(&self, channel: Channel, level: LogLevel, text: &str) {
        let message = LogMessage::new(level, self.render(text));
        match self.slot(channel).submit(message) {
            Submission::Delivered => self.metrics.record_delivered(),
            Submission::Buffered => self.metrics.record_buffered(),
        };
    }

    fn slot(&self, channel: Channel) -> &ChannelSlot {
        match channel {
            Channel::Output => &self.output,
            Channel::Error => &self.error,
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a failure and its source chain as multi-line text.
pub fn describe_failure(failure: &dyn Error) -> String {
    let mut out = failure.to_string();
    let mut source = failure.source();
    while let Some(cause) = source {
        // Writing into a String cannot fail.
        let _ = write!(out, "\nCaused by: {}", cause);
        source = cause.source();
    }
    out
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_log_facade::prelude::*;
///
/// let logger = Logger::builder()
///     .threshold(LogLevel::Debug)
///     .timestamp_format(TimestampFormat::TimeOfDay)
///     .thread_column_width(12)
///     .output_sink(ConsoleSink::stdout())
///     .error_sink(ConsoleSink::stderr())
///     .build();
///
/// assert_eq!(logger.threshold(), LogLevel::Debug);
/// ```
pub struct LoggerBuilder {
    threshold: LogLevel,
    timestamps: Option<TimestampFormat>,
    thread_column_width: usize,
    output_sink: Option<Arc<dyn Sink>>,
    error_sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::default(),
            timestamps: None,
            thread_column_width: DEFAULT_THREAD_COLUMN_WIDTH,
            output_sink: None,
            error_sink: None,
        }
    }

    /// Set the minimum observable level
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    /// Enable or disable the timestamp column
    ///
    /// Enabling keeps a format set earlier, or uses the default one.
    #[must_use = "builder methods return a new value"]
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = if enabled {
            Some(self.timestamps.unwrap_or_default())
        } else {
            None
        };
        self
    }

    /// Enable the timestamp column with `format`
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamps = Some(format);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn thread_column_width(mut self, width: usize) -> Self {
        self.thread_column_width = width;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.output_sink = Some(Arc::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.error_sink = Some(Arc::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger {
            threshold: RwLock::new(self.threshold),
            timestamps: self.timestamps,
            thread_column_width: self.thread_column_width,
            ..Logger::new()
        };

        if let Some(sink) = self.output_sink {
            logger.connect_sink(Channel::Output, sink);
        }
        if let Some(sink) = self.error_sink {
            logger.connect_sink(Channel::Error, sink);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
