//! Logging macros for variadic call sites.
//!
//! Each macro collects its trailing arguments into the value slice expected
//! by [`Logger::log`](crate::Logger::log). The template uses `{}` markers
//! resolved by the logger, not `format!` syntax.
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::info;
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new();
/// use rust_log_facade::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Warn, "Retry {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! deep_trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::DeepTrace, $($rest)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($rest)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($rest)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new();
/// use rust_log_facade::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($rest)+)
    };
}

/// Log an error-level message on the output channel.
///
/// Use [`Logger::report`](crate::Logger::report) for failure values.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($rest)+)
    };
}
