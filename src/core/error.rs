//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A level name that does not match any known level
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// The `log` crate already has a global logger installed
    #[error("Failed to register log bridge: {0}")]
    BridgeRegistration(#[from] log::SetLoggerError),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }
}
