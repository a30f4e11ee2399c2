//! Process-wide logger
//!
//! Applications that do not want to pass a [`Logger`] around can use the
//! global one. It starts with a [`ConsoleSink`] and no error formatters;
//! formatters registered during setup are seen by every later log call.
//!
//! ```
//! use rust_block_logger::{global, info};
//!
//! info!(global::logger(), "service {} ready", "billing");
//! ```

use super::error_formatter::ErrorFormatter;
use super::logger::Logger;
use super::sink::Sink;
use crate::sinks::ConsoleSink;
use once_cell::sync::Lazy;

static GLOBAL_LOGGER: Lazy<Logger> = Lazy::new(|| Logger::builder().sink(ConsoleSink::new()).build());

/// The process-wide logger, created on first use
pub fn logger() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Append an error formatter to the process-wide logger
pub fn add_formatter<F: ErrorFormatter + 'static>(formatter: F) {
    GLOBAL_LOGGER.add_formatter(formatter);
}

/// Add a sink to the process-wide logger
pub fn add_sink<S: Sink + 'static>(sink: S) {
    GLOBAL_LOGGER.add_sink(Box::new(sink));
}
