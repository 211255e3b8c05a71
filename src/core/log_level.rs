//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, also used as the logger threshold.
///
/// `All` and `None` are sentinel bounds: they are meaningful only as a
/// threshold and never as the level of an emitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    All = 0,
    DeepTrace = 1,
    Trace = 2,
    Debug = 3,
    #[default]
    Info = 4,
    Warn = 5,
    Error = 6,
    None = 7,
}

impl LogLevel {
    /// Every level a message may carry, most verbose first.
    pub const MESSAGE_LEVELS: [LogLevel; 6] = [
        LogLevel::DeepTrace,
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Numeric rank; lower is more verbose.
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, LogLevel::All | LogLevel::None)
    }

    /// Whether a message at `self` passes `threshold`.
    #[inline]
    pub const fn is_observable_under(self, threshold: LogLevel) -> bool {
        !self.is_sentinel() && threshold.rank() <= self.rank()
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::All => "ALL",
            LogLevel::DeepTrace => "DEEP_TRACE",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::None => "NONE",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::DeepTrace | LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::All | LogLevel::None => White,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "ALL" => Ok(LogLevel::All),
            "DEEP_TRACE" | "DEEPTRACE" => Ok(LogLevel::DeepTrace),
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "NONE" | "OFF" => Ok(LogLevel::None),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
