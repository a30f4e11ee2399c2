//! Sink forwarding blocks to the `tracing` facade
//!
//! This is the bridge to whatever platform log facility the application has
//! installed as a `tracing` subscriber. Private blocks are redacted unless
//! the sink is told to reveal them.

use crate::core::{LogRecord, Result, Severity, Sink};

/// Text emitted in place of a private block
pub const REDACTED: &str = "<private>";

/// Target used for every emitted event
pub const TRACING_TARGET: &str = "rust_block_logger";

#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    reveal_private: bool,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit private blocks verbatim instead of redacting them
    #[must_use]
    pub fn reveal_private(mut self, reveal: bool) -> Self {
        self.reveal_private = reveal;
        self
    }

    fn payload<'a>(&self, record: &'a LogRecord) -> &'a str {
        if record.is_private && !self.reveal_private {
            REDACTED
        } else {
            &record.text
        }
    }
}

impl Sink for TracingSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let text = self.payload(record);
        let severity = record.severity.to_str();

        match record.severity {
            Severity::Verbose => {
                tracing::trace!(target: TRACING_TARGET, severity, "\n{}", text)
            }
            Severity::Debug => tracing::debug!(target: TRACING_TARGET, severity, "\n{}", text),
            Severity::Info => tracing::info!(target: TRACING_TARGET, severity, "\n{}", text),
            Severity::Warning | Severity::Notice => {
                tracing::warn!(target: TRACING_TARGET, severity, "\n{}", text)
            }
            Severity::Error | Severity::Fault => {
                tracing::error!(target: TRACING_TARGET, severity, "\n{}", text)
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_blocks_are_redacted() {
        let record = LogRecord::new("secret block".to_string(), Severity::Notice, true);

        assert_eq!(TracingSink::new().payload(&record), REDACTED);
        assert_eq!(
            TracingSink::new().reveal_private(true).payload(&record),
            "secret block"
        );
    }

    #[test]
    fn test_public_blocks_pass_through() {
        let record = LogRecord::new("public block".to_string(), Severity::Info, false);
        assert_eq!(TracingSink::new().payload(&record), "public block");
    }

    #[test]
    fn test_write_without_subscriber() {
        let mut sink = TracingSink::new();
        for severity in Severity::ALL {
            let record = LogRecord::new("block".to_string(), severity, false);
            assert!(sink.write(&record).is_ok());
        }
        assert_eq!(sink.name(), "tracing");
    }
}
