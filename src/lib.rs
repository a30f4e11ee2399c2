//! # Rust Block Logger
//!
//! A structured, human-readable logging facade. Every log call is rendered
//! as a framed block of titled sections and handed to one or more sinks:
//!
//! ```text
//! ┌--- logger
//! |	Date: 2025-01-08T10:30:45.123Z
//! |	Status: ❤️ Error
//! |	Thread
//! |		Stack size: 8388608
//! |		Priority: 0
//! |		Name: main
//! |		Executing: true
//! |		Main Thread: true
//! |	File
//! |		Name: main.rs
//! |		Function: app::main
//! |		Line: 12
//! |		Column: 5
//! |	Error
//! |		Localized: connection reset
//! |		Error: Custom { kind: Other, error: "connection reset" }
//! └-------
//! ```
//!
//! ## Features
//!
//! - **Severity-driven layout**: Info, Debug, Verbose, Warning, Notice, Error, Fault
//! - **Pluggable error formatters**: render your own error types as labeled fields
//! - **Swappable sinks**: console, `tracing`, in-memory, or your own
//! - **Lazy messages**: the message closure only runs when a sink will receive it

pub mod adapters;
pub mod core;
pub mod macros;
pub mod sinks;

pub use crate::core::global;

pub mod prelude {
    pub use crate::core::{
        CallSite, ErrorFormatter, ErrorKind, ErrorValue, EventBuilder, EventFormatter,
        FieldValue, FnErrorFormatter, FormatterConfig, FormatterRegistry, LogEvent, LogRecord,
        LoggableValue, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Section,
        Severity, Sink, ThreadSnapshot, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink};
    #[cfg(feature = "tracing-sink")]
    pub use crate::sinks::TracingSink;
}

pub use crate::core::{
    CallSite, ErrorFormatter, ErrorKind, ErrorValue, EventBuilder, EventFormatter, FieldValue,
    FnErrorFormatter, FormatterConfig, FormatterRegistry, LogEvent, LogRecord, LoggableValue,
    Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Section, Severity, Sink,
    ThreadSnapshot, TimestampFormat,
};
pub use sinks::{ConsoleSink, MemorySink};
