//! Sink implementations

pub mod console;
pub mod memory;
#[cfg(feature = "tracing-sink")]
pub mod tracing_sink;

pub use console::ConsoleSink;
pub use memory::MemorySink;
#[cfg(feature = "tracing-sink")]
pub use tracing_sink::TracingSink;

pub use crate::core::Sink;
