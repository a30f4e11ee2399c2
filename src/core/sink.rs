//! Sink trait for rendered log blocks

use super::{error::Result, severity::Severity};

/// A fully rendered block as handed to sinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub text: String,
    pub severity: Severity,
    pub is_private: bool,
}

impl LogRecord {
    pub fn new(text: String, severity: Severity, is_private: bool) -> Self {
        Self {
            text,
            severity,
            is_private,
        }
    }
}

/// Destination for rendered blocks
///
/// The logger serializes calls to each sink. A sink may log through the
/// logger it is registered with; the nested block reaches every other sink
/// but not the one that produced it.
pub trait Sink: Send + Sync {
    fn write(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
