//! Core logger types and traits

pub mod call_site;
pub mod error;
pub mod error_formatter;
pub mod event_formatter;
pub mod global;
pub mod log_event;
pub mod logger;
pub mod metrics;
pub mod section;
pub mod severity;
pub mod sink;
pub mod thread_snapshot;
pub mod timestamp;
pub mod value;

pub use call_site::CallSite;
pub use error::{LoggerError, Result};
pub use error_formatter::{ErrorFormatter, FnErrorFormatter, FormatterRegistry};
pub use event_formatter::{render_block, render_error, EventFormatter, BLOCK_CLOSE, BLOCK_OPEN};
pub use log_event::LogEvent;
pub use logger::{EventBuilder, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use section::Section;
pub use severity::Severity;
pub use sink::{LogRecord, Sink};
pub use thread_snapshot::ThreadSnapshot;
pub use timestamp::{FormatterConfig, TimestampFormat};
pub use value::{ErrorKind, ErrorValue, FieldValue, LoggableValue};
