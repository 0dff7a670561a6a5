//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Numeric level with no entry in the level registry
    #[error("Unknown log level: {level}")]
    UnknownLevel { level: u32 },

    /// Level name with no entry in the level registry
    #[error("Unknown log level name: '{name}'")]
    UnknownLevelName { name: String },

    /// Structured message that could not be encoded as text
    #[error("Failed to serialize log message: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure raised by a handler while accepting a record
    #[error("Handler '{handler}' failed: {message}")]
    Handler { handler: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an unknown level error
    pub fn unknown_level(level: u32) -> Self {
        LoggerError::UnknownLevel { level }
    }

    /// Create an unknown level name error
    pub fn unknown_level_name(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevelName { name: name.into() }
    }

    /// Create a handler failure
    pub fn handler(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Handler {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// True for both flavors of registry lookup failure
    pub fn is_unknown_level(&self) -> bool {
        matches!(
            self,
            LoggerError::UnknownLevel { .. } | LoggerError::UnknownLevelName { .. }
        )
    }
}
