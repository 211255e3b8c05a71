//! Rendered log message

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::fmt;

// Thread-local cache for the label shown in the thread column
thread_local! {
    static THREAD_LABEL_CACHE: OnceCell<String> = const { OnceCell::new() };
}

/// Label identifying the calling thread: its name, or its id when unnamed.
pub fn current_thread_label() -> String {
    THREAD_LABEL_CACHE.with(|cache| {
        cache
            .get_or_init(|| {
                let thread = std::thread::current();
                match thread.name() {
                    Some(name) => name.to_string(),
                    None => format!("{:?}", thread.id()),
                }
            })
            .clone()
    })
}

/// A message that passed the threshold and has been fully rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    level: LogLevel,
    message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Rendered text, including the trailing line terminator.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
