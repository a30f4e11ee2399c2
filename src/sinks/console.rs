//! Console sink implementation

use crate::core::{LogRecord, LoggerError, Result, Severity, Sink};
use std::io::Write;

pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create a console sink with coloring switched on or off
    ///
    /// Colors require the `console` feature and are ignored otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_block_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::with_colors(false);
    /// ```
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    #[cfg(feature = "console")]
    fn paint(&self, record: &LogRecord) -> String {
        use colored::Colorize;
        if self.use_colors {
            record.text.color(record.severity.color_code()).to_string()
        } else {
            record.text.clone()
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, record: &LogRecord) -> String {
        let _ = self.use_colors;
        record.text.clone()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.paint(record);

        // Route Error and Fault blocks to stderr, others to stdout
        let (stream, result) = match record.severity {
            Severity::Error | Severity::Fault => {
                ("stderr", std::io::stderr().lock().write_all(output.as_bytes()))
            }
            _ => ("stdout", std::io::stdout().lock().write_all(output.as_bytes())),
        };
        result.map_err(|e| {
            LoggerError::io_operation(format!("writing to {}", stream), "cannot write block", e)
        })
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
