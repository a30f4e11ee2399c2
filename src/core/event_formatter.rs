//! Block composition
//!
//! Turns a [`LogEvent`] into the sections of a block and the block into text.
//! Which sections appear depends on the severity:
//!
//! | Severity                                 | Sections                                    |
//! |------------------------------------------|---------------------------------------------|
//! | Info                                     | Date, Status                                |
//! | Debug                                    | Date, Status, File                          |
//! | Verbose, Warning, Notice, Error, Fault   | Date, Status, Thread, File                  |
//!
//! followed by Log (text messages), Error (error messages at Error/Fault) and
//! Context (when a context value is given).

use super::call_site::CallSite;
use super::error_formatter::ErrorFormatter;
use super::log_event::LogEvent;
use super::section::Section;
use super::severity::Severity;
use super::thread_snapshot::ThreadSnapshot;
use super::timestamp::FormatterConfig;
use super::value::{ErrorValue, LoggableValue};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// First line of every block
pub const BLOCK_OPEN: &str = "┌--- logger";
/// Last line of every block
pub const BLOCK_CLOSE: &str = "└-------";

/// Title of the fallback section for errors no formatter claims
pub const FALLBACK_ERROR_TITLE: &str = "Error";

/// Builds sections from event data and renders them into a block
#[derive(Debug, Clone, Default)]
pub struct EventFormatter {
    config: FormatterConfig,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn date(&self, at: &DateTime<Utc>) -> Section {
        Section::untitled().with_field("Date", self.config.timestamp_format.format(at))
    }

    pub fn status(&self, severity: Severity) -> Section {
        Section::untitled().with_field("Status", severity.status_text())
    }

    pub fn file_description(&self, call_site: &CallSite) -> Section {
        Section::titled("File")
            .with_field("Name", call_site.file_name())
            .with_field("Function", call_site.function)
            .with_field("Line", call_site.line)
            .with_field("Column", call_site.column)
    }

    pub fn thread(&self, thread: &ThreadSnapshot) -> Section {
        let mut section = Section::titled("Thread")
            .with_field("Stack size", thread.stack_size)
            .with_field("Priority", thread.priority);

        if let Some(name) = &thread.name {
            section.insert("Name", name);
        }

        // Flags are only listed when set
        let flags = [
            ("Cancelled", thread.cancelled),
            ("Executing", thread.executing),
            ("Finished", thread.finished),
            ("Main Thread", thread.main_thread),
        ];
        for (name, set) in flags {
            if set {
                section.insert(name, true);
            }
        }

        section
    }

    /// Log section for text messages; other values produce nothing
    pub fn message(&self, message: &LoggableValue) -> Option<Section> {
        message
            .as_text()
            .map(|text| Section::titled("Log").with_field("Message", text))
    }

    /// Error section for error messages logged at an error-class severity
    pub fn error(
        &self,
        severity: Severity,
        message: &LoggableValue,
        formatters: &[Arc<dyn ErrorFormatter>],
    ) -> Option<Section> {
        if !severity.is_error_class() {
            return None;
        }
        message
            .as_error()
            .map(|error| render_error(error, formatters))
    }

    pub fn context(
        &self,
        context: Option<&LoggableValue>,
        formatters: &[Arc<dyn ErrorFormatter>],
    ) -> Option<Section> {
        let section = match context? {
            LoggableValue::Error(error) => render_error(error, formatters),
            LoggableValue::Text(value) | LoggableValue::Opaque(value) => {
                Section::untitled().with_field("Context", value)
            }
        };
        Some(section)
    }

    /// All sections of the event, in block order
    pub fn sections(
        &self,
        event: &LogEvent,
        formatters: &[Arc<dyn ErrorFormatter>],
    ) -> Vec<Section> {
        let mut sections = vec![self.date(&event.timestamp), self.status(event.severity)];

        if event.severity.includes_thread() {
            sections.push(self.thread(&event.thread));
        }
        if event.severity.includes_file_description() {
            sections.push(self.file_description(&event.call_site));
        }

        sections.extend(self.message(&event.message));
        sections.extend(self.error(event.severity, &event.message, formatters));
        sections.extend(self.context(event.context.as_ref(), formatters));

        sections
    }

    /// Render the whole event as a framed block
    pub fn compose(&self, event: &LogEvent, formatters: &[Arc<dyn ErrorFormatter>]) -> String {
        render_block(&self.sections(event, formatters))
    }
}

/// Render an error with the first formatter claiming it, or the fallback
/// `Localized` / `Error` fields when none does
pub fn render_error(error: &ErrorValue, formatters: &[Arc<dyn ErrorFormatter>]) -> Section {
    match formatters.iter().find(|formatter| formatter.claims(error)) {
        Some(formatter) => {
            let mut section = Section::titled(formatter.name());
            for (name, value) in formatter.fields(error) {
                section.insert(name, value);
            }
            section
        }
        None => Section::titled(FALLBACK_ERROR_TITLE)
            .with_field("Localized", error.description())
            .with_field("Error", error.representation()),
    }
}

/// Frame rendered sections between the block markers
pub fn render_block(sections: &[Section]) -> String {
    let mut block = String::with_capacity(256);
    block.push_str(BLOCK_OPEN);
    block.push('\n');
    for section in sections {
        section.render_into(&mut block);
    }
    block.push_str(BLOCK_CLOSE);
    block.push('\n');
    block
}
