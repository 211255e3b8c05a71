//! Console sink implementation

use crate::core::{LogMessage, Sink};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes rendered messages verbatim to stdout or stderr.
///
/// Rendered text already ends with a line terminator, so nothing is added.
pub struct ConsoleSink {
    stream: ConsoleStream,
    use_colors: bool,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
            use_colors: false,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
            use_colors: false,
        }
    }

    /// Color each message by its level. Has no effect without the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }

    #[cfg(feature = "console")]
    fn format_text(&self, message: &LogMessage) -> String {
        if self.use_colors {
            message
                .message()
                .color(message.level().color_code())
                .to_string()
        } else {
            message.message().to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn format_text(&self, message: &LogMessage) -> String {
        message.message().to_string()
    }
}

impl Sink for ConsoleSink {
    fn deliver(&self, message: LogMessage) {
        let text = self.format_text(&message);
        let result = match self.stream {
            ConsoleStream::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(text.as_bytes()).and_then(|()| out.flush())
            }
            ConsoleStream::Stderr => {
                let mut out = std::io::stderr().lock();
                out.write_all(text.as_bytes()).and_then(|()| out.flush())
            }
        };

        if let Err(e) = result {
            eprintln!("[LOGGER ERROR] Console sink write to {:?} failed: {}", self.stream, e);
        }
    }
}
