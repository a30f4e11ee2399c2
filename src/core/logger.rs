//! Main logger implementation

use super::{
    call_site::CallSite,
    error::{LoggerError, Result},
    error_formatter::{ErrorFormatter, FormatterRegistry},
    event_formatter::EventFormatter,
    log_event::LogEvent,
    metrics::LoggerMetrics,
    severity::Severity,
    sink::{LogRecord, Sink},
    timestamp::{FormatterConfig, TimestampFormat},
    value::LoggableValue,
};
use parking_lot::{ReentrantMutex, RwLock};
use std::cell::RefCell;
use std::sync::Arc;

/// A registered sink; the reentrant lock lets a sink log through its own
/// logger without deadlocking, the `RefCell` detects that nesting
type SharedSink = Arc<ReentrantMutex<RefCell<Box<dyn Sink>>>>;

/// Block logger
///
/// Every call composes one block on the caller's thread and hands it to each
/// registered sink. The message closure runs at most once, and not at all when
/// no sink is registered.
///
/// # Example
///
/// ```
/// use rust_block_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().sink(sink.clone()).build();
///
/// logger.debug(|| "cache warmed");
/// logger.notice_with_context(|| "slow request", 1250);
///
/// assert_eq!(sink.len(), 2);
/// ```
pub struct Logger {
    sinks: Arc<RwLock<Vec<SharedSink>>>,
    formatters: FormatterRegistry,
    formatter: EventFormatter,
    /// Metrics for observability (logged, suppressed, failed writes)
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: Arc::new(RwLock::new(Vec::new())),
            formatters: FormatterRegistry::new(),
            formatter: EventFormatter::new(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks
            .write()
            .push(Arc::new(ReentrantMutex::new(RefCell::new(sink))));
    }

    /// Register an error formatter; earlier registrations win when kinds overlap
    pub fn add_formatter<F: ErrorFormatter + 'static>(&self, formatter: F) {
        self.formatters.add(formatter);
    }

    pub fn formatters(&self) -> &FormatterRegistry {
        &self.formatters
    }

    pub fn event_formatter(&self) -> &EventFormatter {
        &self.formatter
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    /// Get logger metrics for monitoring
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush every sink, returning the first error
    ///
    /// A failing sink does not stop the remaining sinks from being flushed.
    /// Sinks busy writing on the calling thread are skipped.
    pub fn flush(&self) -> Result<()> {
        let sinks = self.sinks.read().clone();
        let mut first_error = None;

        for slot in &sinks {
            let guard = slot.lock();
            let Ok(mut sink) = guard.try_borrow_mut() else {
                continue;
            };
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Compose and dispatch one event
    ///
    /// Locks are not held while the message closure runs, so the closure may
    /// itself log through this logger. The sink list lock is released before
    /// any sink writes.
    pub(crate) fn dispatch<F, M>(
        &self,
        severity: Severity,
        call_site: CallSite,
        context: Option<LoggableValue>,
        is_private: bool,
        message: F,
    ) where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        if self.sinks.read().is_empty() {
            self.metrics.record_suppressed();
            return;
        }

        let mut event = LogEvent::new(severity, message(), call_site).with_private(is_private);
        event.context = context;

        let formatters = self.formatters.snapshot();
        let text = self.formatter.compose(&event, &formatters);
        let record = LogRecord::new(text, severity, is_private);

        let sinks = self.sinks.read().clone();
        Self::process(&sinks, &record, &self.metrics);
    }

    /// Hand a record to every sink with per-sink panic isolation
    ///
    /// A failing or panicking sink is reported on stderr and counted; the
    /// remaining sinks still receive the record. A sink that logs from its own
    /// `write` misses the nested record instead of deadlocking.
    fn process(sinks: &[SharedSink], record: &LogRecord, metrics: &LoggerMetrics) {
        for (idx, slot) in sinks.iter().enumerate() {
            let guard = slot.lock();
            let failure = match guard.try_borrow_mut() {
                Ok(mut sink) => {
                    let write_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                        sink.write(record)
                    }));
                    match write_result {
                        Ok(Ok(())) => None,
                        Ok(Err(e)) => Some(LoggerError::sink(sink.name(), e.to_string())),
                        Err(panic_info) => {
                            Some(LoggerError::sink_panicked(sink.name(), panic_info.as_ref()))
                        }
                    }
                }
                Err(_) => Some(LoggerError::SinkReentered),
            };

            if let Some(error) = failure {
                let tag = match &error {
                    LoggerError::SinkPanicked { .. } => "[LOGGER CRITICAL]",
                    _ => "[LOGGER ERROR]",
                };
                eprintln!("{} Sink #{}: {}. Other sinks continue to function.", tag, idx, error);
                metrics.record_failed_write();
            }
        }

        metrics.record_logged();
    }

    /// Start an event with full control over context, privacy and call site
    ///
    /// # Example
    ///
    /// ```
    /// use rust_block_logger::prelude::*;
    ///
    /// let logger = Logger::builder().sink(MemorySink::new()).build();
    ///
    /// logger
    ///     .event(Severity::Error)
    ///     .context("user 42")
    ///     .private(true)
    ///     .log(|| LoggableValue::error(std::io::Error::other("disk full")));
    /// ```
    #[track_caller]
    pub fn event(&self, severity: Severity) -> EventBuilder<'_> {
        EventBuilder::new(self, severity, CallSite::caller())
    }

    #[track_caller]
    pub fn info<F, M>(&self, message: F)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.dispatch(Severity::Info, CallSite::caller(), None, false, message);
    }

    #[track_caller]
    pub fn debug<F, M>(&self, message: F)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.dispatch(Severity::Debug, CallSite::caller(), None, false, message);
    }

    #[track_caller]
    pub fn verbose<F, M>(&self, message: F)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.dispatch(Severity::Verbose, CallSite::caller(), None, false, message);
    }

    #[deprecated(since = "0.1.0", note = "Use `notice` instead")]
    #[track_caller]
    pub fn warning<F, M>(&self, message: F)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.dispatch(Severity::Warning, CallSite::caller(), None, false, message);
    }

    #[track_caller]
    pub fn notice<F, M>(&self, message: F)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.dispatch(Severity::Notice, CallSite::caller(), None, false, message);
    }

    #[track_caller]
    pub fn error<F, M>(&self, message: F)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.dispatch(Severity::Error, CallSite::caller(), None, false, message);
    }

    #[track_caller]
    pub fn fault<F, M>(&self, message: F)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.dispatch(Severity::Fault, CallSite::caller(), None, false, message);
    }

    /// Log with a context value at any severity
    #[track_caller]
    pub fn log_with_context<F, M>(
        &self,
        severity: Severity,
        message: F,
        context: impl Into<LoggableValue>,
    ) where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.dispatch(severity, CallSite::caller(), Some(context.into()), false, message);
    }

    #[track_caller]
    pub fn info_with_context<F, M>(&self, message: F, context: impl Into<LoggableValue>)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.log_with_context(Severity::Info, message, context);
    }

    #[track_caller]
    pub fn debug_with_context<F, M>(&self, message: F, context: impl Into<LoggableValue>)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.log_with_context(Severity::Debug, message, context);
    }

    #[track_caller]
    pub fn verbose_with_context<F, M>(&self, message: F, context: impl Into<LoggableValue>)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.log_with_context(Severity::Verbose, message, context);
    }

    #[deprecated(since = "0.1.0", note = "Use `notice_with_context` instead")]
    #[track_caller]
    pub fn warning_with_context<F, M>(&self, message: F, context: impl Into<LoggableValue>)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.log_with_context(Severity::Warning, message, context);
    }

    #[track_caller]
    pub fn notice_with_context<F, M>(&self, message: F, context: impl Into<LoggableValue>)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.log_with_context(Severity::Notice, message, context);
    }

    #[track_caller]
    pub fn error_with_context<F, M>(&self, message: F, context: impl Into<LoggableValue>)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.log_with_context(Severity::Error, message, context);
    }

    #[track_caller]
    pub fn fault_with_context<F, M>(&self, message: F, context: impl Into<LoggableValue>)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.log_with_context(Severity::Fault, message, context);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Flush failed during shutdown: {}", e);
        }
    }
}

/// Builder for a single event
///
/// Created by [`Logger::event`]; the call site defaults to the caller of
/// `event`.
pub struct EventBuilder<'a> {
    logger: &'a Logger,
    severity: Severity,
    call_site: CallSite,
    context: Option<LoggableValue>,
    is_private: bool,
}

impl<'a> EventBuilder<'a> {
    pub fn new(logger: &'a Logger, severity: Severity, call_site: CallSite) -> Self {
        Self {
            logger,
            severity,
            call_site,
            context: None,
            is_private: false,
        }
    }

    #[must_use]
    pub fn context(mut self, context: impl Into<LoggableValue>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Mark the block as private; sinks may redact it
    #[must_use]
    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    #[must_use]
    pub fn call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = call_site;
        self
    }

    /// Compose and dispatch the event
    pub fn log<F, M>(self, message: F)
    where
        F: FnOnce() -> M,
        M: Into<LoggableValue>,
    {
        self.logger.dispatch(
            self.severity,
            self.call_site,
            self.context,
            self.is_private,
            message,
        );
    }
}

/// Builder for creating a Logger with fluent API
///
/// # Example
/// ```
/// use rust_block_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .sink(ConsoleSink::new())
///     .timestamp_format(TimestampFormat::Iso8601Micros)
///     .build();
/// ```
pub struct LoggerBuilder {
    sinks: Vec<Box<dyn Sink>>,
    formatters: FormatterRegistry,
    config: FormatterConfig,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            formatters: FormatterRegistry::new(),
            config: FormatterConfig::default(),
        }
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Register an error formatter
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: ErrorFormatter + 'static>(self, formatter: F) -> Self {
        self.formatters.add(formatter);
        self
    }

    /// Use an existing registry, shared with whoever else holds it
    #[must_use = "builder methods return a new value"]
    pub fn formatter_registry(mut self, registry: FormatterRegistry) -> Self {
        self.formatters = registry;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter_config(mut self, config: FormatterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger {
            sinks: Arc::new(RwLock::new(Vec::new())),
            formatters: self.formatters,
            formatter: EventFormatter::with_config(self.config),
            metrics: Arc::new(LoggerMetrics::new()),
        };

        for sink in self.sinks {
            logger.add_sink(sink);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error_formatter::FnErrorFormatter;
    use crate::sinks::MemorySink;
    use std::cell::Cell;
    use std::fmt;

    #[derive(Debug)]
    struct QuotaExceeded {
        limit: u32,
    }

    impl fmt::Display for QuotaExceeded {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "quota of {} exceeded", self.limit)
        }
    }

    impl std::error::Error for QuotaExceeded {}

    struct FailingSink;

    impl Sink for FailingSink {
        fn write(&mut self, _record: &LogRecord) -> Result<()> {
            Err(LoggerError::writer("always fails"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingSink;

    impl Sink for PanickingSink {
        fn write(&mut self, _record: &LogRecord) -> Result<()> {
            panic!("sink exploded");
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_builder_basic() {
        let logger = Logger::builder().build();
        assert_eq!(logger.sink_count(), 0);
        assert!(logger.formatters().is_empty());
    }

    #[test]
    fn test_builder_full_configuration() {
        let logger = Logger::builder()
            .sink(MemorySink::new())
            .sink(MemorySink::new())
            .formatter(FnErrorFormatter::new("Quota", |e: &QuotaExceeded| {
                vec![("Limit".to_string(), e.limit.into())]
            }))
            .timestamp_format(TimestampFormat::UnixMillis)
            .build();

        assert_eq!(logger.sink_count(), 2);
        assert_eq!(logger.formatters().len(), 1);
        assert_eq!(
            logger.event_formatter().config().timestamp_format,
            TimestampFormat::UnixMillis
        );
    }

    #[test]
    fn test_message_not_evaluated_without_sinks() {
        let logger = Logger::new();
        let evaluated = Cell::new(false);

        logger.info(|| {
            evaluated.set(true);
            "never built"
        });

        assert!(!evaluated.get());
        assert_eq!(logger.metrics().suppressed(), 1);
        assert_eq!(logger.metrics().total_logged(), 0);
    }

    #[test]
    fn test_message_evaluated_once() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();
        let evaluations = Cell::new(0);

        logger.error(|| {
            evaluations.set(evaluations.get() + 1);
            LoggableValue::error(QuotaExceeded { limit: 3 })
        });

        assert_eq!(evaluations.get(), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_record_carries_severity_and_privacy() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger.event(Severity::Notice).private(true).log(|| "token refreshed");

        let records = sink.records();
        assert_eq!(records[0].severity, Severity::Notice);
        assert!(records[0].is_private);
        assert!(records[0].text.contains("🧡 Notice"));
    }

    #[test]
    fn test_call_site_defaults_to_caller() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger.debug(|| "where am I");

        let text = &sink.records()[0].text;
        assert!(text.contains("Name: logger.rs"));
        assert!(text.contains("Function: <unknown>"));
    }

    #[test]
    fn test_explicit_call_site() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger
            .event(Severity::Debug)
            .call_site(CallSite::new("app/src/main.rs", "app::main", 7, 3))
            .log(|| "explicit");

        let text = &sink.records()[0].text;
        assert!(text.contains("|\t\tName: main.rs\n"));
        assert!(text.contains("|\t\tFunction: app::main\n"));
        assert!(text.contains("|\t\tLine: 7\n"));
        assert!(text.contains("|\t\tColumn: 3\n"));
    }

    #[test]
    fn test_formatter_registered_after_build_is_used() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger.error(|| LoggableValue::error(QuotaExceeded { limit: 5 }));
        logger.add_formatter(FnErrorFormatter::new("Quota", |e: &QuotaExceeded| {
            vec![("Limit".to_string(), e.limit.into())]
        }));
        logger.error(|| LoggableValue::error(QuotaExceeded { limit: 5 }));

        let texts = sink.texts();
        assert!(texts[0].contains("|\tError\n|\t\tLocalized: quota of 5 exceeded\n"));
        assert!(texts[1].contains("|\tQuota\n|\t\tLimit: 5\n"));
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .sink(FailingSink)
            .sink(PanickingSink)
            .sink(sink.clone())
            .build();

        logger.notice(|| "still delivered");

        assert_eq!(sink.len(), 1);
        assert_eq!(logger.metrics().failed_writes(), 2);
        assert_eq!(logger.metrics().total_logged(), 1);
    }

    #[test]
    fn test_flush_reaches_every_sink_after_failure() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct FlushFailingSink;

        impl Sink for FlushFailingSink {
            fn write(&mut self, _record: &LogRecord) -> Result<()> {
                Ok(())
            }

            fn flush(&mut self) -> Result<()> {
                Err(LoggerError::writer("flush refused"))
            }

            fn name(&self) -> &str {
                "flush-failing"
            }
        }

        struct CountingSink(Arc<AtomicUsize>);

        impl Sink for CountingSink {
            fn write(&mut self, _record: &LogRecord) -> Result<()> {
                Ok(())
            }

            fn flush(&mut self) -> Result<()> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }

            fn name(&self) -> &str {
                "counting"
            }
        }

        let flushes = Arc::new(AtomicUsize::new(0));
        let logger = Logger::builder()
            .sink(FlushFailingSink)
            .sink(CountingSink(Arc::clone(&flushes)))
            .sink(FlushFailingSink)
            .build();

        let result = logger.flush();

        assert!(matches!(result, Err(LoggerError::WriterError(ref m)) if m == "flush refused"));
        assert_eq!(flushes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sink_may_log_through_its_own_logger() {
        use std::sync::Weak;

        struct EchoSink {
            logger: Weak<Logger>,
        }

        impl Sink for EchoSink {
            fn write(&mut self, record: &LogRecord) -> Result<()> {
                if record.text.contains("Message: original") {
                    if let Some(logger) = self.logger.upgrade() {
                        logger.info(|| "echo");
                    }
                }
                Ok(())
            }

            fn flush(&mut self) -> Result<()> {
                Ok(())
            }

            fn name(&self) -> &str {
                "echo"
            }
        }

        let sink = MemorySink::new();
        let logger = Arc::new(Logger::builder().sink(sink.clone()).build());
        logger.add_sink(Box::new(EchoSink {
            logger: Arc::downgrade(&logger),
        }));

        logger.notice(|| "original");

        let texts = sink.texts();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("|\t\tMessage: original\n"));
        assert!(texts[1].contains("|\t\tMessage: echo\n"));
        // The echo sink itself cannot take the block it is producing
        assert_eq!(logger.metrics().failed_writes(), 1);
        assert_eq!(logger.metrics().total_logged(), 2);
    }

    #[test]
    fn test_message_closure_may_log() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger.info(|| {
            logger.debug(|| "inner");
            "outer"
        });

        let texts = sink.texts();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("Message: inner"));
        assert!(texts[1].contains("Message: outer"));
    }

    #[test]
    #[allow(deprecated)]
    fn test_warning_alias() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger.warning(|| "legacy");
        logger.warning_with_context(|| "legacy", "ctx");

        let records = sink.records();
        assert_eq!(records[0].severity, Severity::Warning);
        assert!(records[0].text.contains("🧡 Warning"));
        assert!(records[0].text.contains("|\tThread\n"));
        assert!(records[1].text.contains("|\tContext: ctx\n"));
    }
}
