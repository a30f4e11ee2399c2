//! Error types for the logger system
//!
//! Formatting a block never fails. These errors only describe sinks that
//! could not write a block they were handed.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
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

    /// Sink rejected a block
    #[error("Sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },

    /// Sink panicked while handling a block
    #[error("Sink '{sink}' panicked: {message}")]
    SinkPanicked { sink: String, message: String },

    /// Sink was handed a block logged from inside its own `write`
    #[error("Sink skipped a nested block logged from its own write")]
    SinkReentered,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
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

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a sink panic error from a caught panic payload
    pub fn sink_panicked(sink: impl Into<String>, payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        LoggerError::SinkPanicked {
            sink: sink.into(),
            message,
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::sink("memory", "buffer poisoned");
        assert!(matches!(err, LoggerError::SinkError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::sink("console", "stdout closed");
        assert_eq!(err.to_string(), "Sink 'console' failed: stdout closed");

        let err = LoggerError::writer("not initialized");
        assert_eq!(err.to_string(), "Writer error: not initialized");

        assert_eq!(
            LoggerError::SinkReentered.to_string(),
            "Sink skipped a nested block logged from its own write"
        );
    }

    #[test]
    fn test_sink_panicked_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        let err = LoggerError::sink_panicked("memory", payload.as_ref());
        assert_eq!(err.to_string(), "Sink 'memory' panicked: boom");

        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("owned boom"));
        let err = LoggerError::sink_panicked("memory", payload.as_ref());
        assert_eq!(err.to_string(), "Sink 'memory' panicked: owned boom");

        let payload: Box<dyn std::any::Any + Send> = Box::new(42u8);
        let err = LoggerError::sink_panicked("memory", payload.as_ref());
        assert_eq!(err.to_string(), "Sink 'memory' panicked: Unknown panic");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing to stdout", "cannot write block", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing to stdout"));
        assert!(err.to_string().contains("cannot write block"));
    }
}
