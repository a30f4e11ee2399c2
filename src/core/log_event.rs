//! Log event structure

use super::call_site::CallSite;
use super::severity::Severity;
use super::thread_snapshot::ThreadSnapshot;
use super::value::LoggableValue;
use chrono::{DateTime, Utc};

/// Everything known about one log call, with the message already evaluated
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub severity: Severity,
    pub message: LoggableValue,
    pub context: Option<LoggableValue>,
    pub call_site: CallSite,
    pub timestamp: DateTime<Utc>,
    pub thread: ThreadSnapshot,
    pub is_private: bool,
}

impl LogEvent {
    /// Create an event stamped with the current time and thread
    pub fn new(severity: Severity, message: impl Into<LoggableValue>, call_site: CallSite) -> Self {
        Self {
            severity,
            message: message.into(),
            context: None,
            call_site,
            timestamp: Utc::now(),
            thread: ThreadSnapshot::current(),
            is_private: false,
        }
    }

    pub fn with_context(mut self, context: impl Into<LoggableValue>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_thread(mut self, thread: ThreadSnapshot) -> Self {
        self.thread = thread;
        self
    }
}
