//! In-memory sink
//!
//! Keeps every record it receives. Clones share the same buffer, so a clone
//! kept by the caller observes what the logger wrote.

use crate::core::{LogRecord, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Sink that stores records in a shared buffer
///
/// # Example
///
/// ```
/// use rust_block_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().sink(sink.clone()).build();
///
/// logger.info(|| "stored");
/// assert_eq!(sink.len(), 1);
/// assert!(sink.records()[0].text.contains("Message: stored"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all records received so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Rendered text of all records received so far
    pub fn texts(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.text.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Remove and return all records
    pub fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl Sink for MemorySink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
