//! Sink trait for message delivery destinations

use super::log_message::LogMessage;

/// Destination for rendered messages on one channel.
///
/// Sinks are invoked synchronously on the logging thread. Any closure
/// `Fn(LogMessage)` is a sink.
pub trait Sink: Send + Sync {
    fn deliver(&self, message: LogMessage);
}

impl<F> Sink for F
where
    F: Fn(LogMessage) + Send + Sync,
{
    fn deliver(&self, message: LogMessage) {
        self(message)
    }
}
