//! Error types for the logger facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A log record failed a structural check
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Writing a formatted line to a sink failed
    #[error("Write to sink '{sink}' failed: {source}")]
    SinkWrite {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// The telemetry client could not be attached
    #[error("Telemetry backend '{endpoint}' unavailable: {message}")]
    Connectivity { endpoint: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a validation error for a record field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a sink write error
    pub fn sink_write(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            sink: sink.into(),
            source,
        }
    }

    /// Create a connectivity error
    pub fn connectivity(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Connectivity {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// True for errors raised while building a logger from bad input
    pub fn is_configuration(&self) -> bool {
        matches!(self, LoggerError::InvalidConfiguration { .. })
    }

    /// True for structural record failures
    pub fn is_validation(&self) -> bool {
        matches!(self, LoggerError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("Logger", "missing credential");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.is_configuration());

        let err = LoggerError::validation("line", "must be positive");
        assert!(err.is_validation());
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("Logger", "name must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for Logger: name must not be empty"
        );

        let err = LoggerError::validation("line", "must be a positive integer, got 0");
        assert_eq!(
            err.to_string(),
            "Validation failed for 'line': must be a positive integer, got 0"
        );

        let err = LoggerError::connectivity("https://ingest.example", "token rejected");
        assert_eq!(
            err.to_string(),
            "Telemetry backend 'https://ingest.example' unavailable: token rejected"
        );
    }

    #[test]
    fn test_sink_write_error_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::sink_write("console", io_err);

        assert!(err.to_string().contains("console"));
        assert!(err.source().is_some());
    }
}
