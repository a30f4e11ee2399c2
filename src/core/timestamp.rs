//! Timestamp formatting utilities
//!
//! Controls how the Date section of a block renders the event time.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::sync::Arc;

/// Timestamp format options for the Date section
///
/// # Examples
///
/// ```
/// use rust_block_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 with nanosecond precision: `2025-01-08T10:30:45.123456789+00:00`
    Rfc3339,

    /// Date and time with offset: `2025-01-08 10:30:45.123 +0000`
    Readable,

    /// Local wall-clock time with offset: `2025-01-08 11:30:45.123 +0100`
    Local,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, applied to UTC time
    ///
    /// Patterns chrono cannot render fall back to [`TimestampFormat::Iso8601`].
    ///
    /// ```
    /// use rust_block_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => {
                datetime.to_rfc3339_opts(chrono::SecondsFormat::Nanos, false)
            }
            TimestampFormat::Readable => datetime.format("%Y-%m-%d %H:%M:%S%.3f %z").to_string(),
            TimestampFormat::Local => datetime
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S%.3f %z")
                .to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(format_str)) {
                    Ok(()) => rendered,
                    Err(_) => TimestampFormat::Iso8601.format(datetime),
                }
            }
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }
}

/// Configuration for block formatting
///
/// # Examples
///
/// ```
/// use rust_block_logger::{FormatterConfig, TimestampFormat};
///
/// let config = FormatterConfig::new()
///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Timestamp format for the Date section
    pub timestamp_format: TimestampFormat,
}

impl FormatterConfig {
    /// Create a new formatter configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a custom strftime-compatible timestamp format
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    /// Wrap this config in an Arc for sharing across loggers
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
