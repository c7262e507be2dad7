//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Registration attempted with an empty key
    #[error("Empty key is not allowed for registering loggers")]
    EmptyKey,

    /// No logger registered under the given key
    #[error("A logger for key '{key}' does not exist")]
    LoggerNotFound { key: String },

    /// The default logger (empty key) cannot be unregistered
    #[error("The default logger cannot be unregistered; stop it instead")]
    DefaultLoggerProtected,

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

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
    /// Create a lookup error for a missing key
    pub fn not_found(key: impl Into<String>) -> Self {
        LoggerError::LoggerNotFound { key: key.into() }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
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

    /// Whether this error came from registering or unregistering a logger
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            LoggerError::EmptyKey
                | LoggerError::LoggerNotFound { .. }
                | LoggerError::DefaultLoggerProtected
        )
    }
}
