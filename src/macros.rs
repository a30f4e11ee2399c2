//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments lazily, like `format!`, and capture
//! the full call site: file, enclosing function, line and column.
//!
//! # Examples
//!
//! ```
//! use rust_block_logger::prelude::*;
//! use rust_block_logger::{info, notice};
//!
//! let logger = Logger::builder().sink(MemorySink::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With a context value
//! notice!(logger, context: 503, "Upstream unavailable");
//! ```

/// Path of the enclosing function, e.g. `my_crate::server::start`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::call_site::trim_function_path(type_name_of(__f))
    }};
}

/// Call-site descriptor for the current location.
///
/// # Examples
///
/// ```
/// use rust_block_logger::call_site;
///
/// let site = call_site!();
/// assert!(site.line > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::std::file!(),
            $crate::function_name!(),
            ::std::line!(),
            ::std::column!(),
        )
    };
}

/// Log a message at the given severity.
///
/// The message is only formatted when the logger has a sink.
///
/// # Examples
///
/// ```
/// # use rust_block_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_block_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// log!(logger, Severity::Notice, context: "retry 3/5", "Reconnecting");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, context: $context:expr, $($arg:tt)+) => {
        $logger
            .event($severity)
            .call_site($crate::call_site!())
            .context($context)
            .log(|| ::std::format!($($arg)+))
    };
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger
            .event($severity)
            .call_site($crate::call_site!())
            .log(|| ::std::format!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_block_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_block_logger::info;
/// info!(logger, "Informational message");
/// info!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_block_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_block_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Cache size: {}", 128);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a verbose-level message.
///
/// # Examples
///
/// ```
/// # use rust_block_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_block_logger::verbose;
/// verbose!(logger, "Entering state: {}", "connecting");
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Verbose, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// Kept for compatibility; prefer [`notice!`](crate::notice).
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
///
/// # Examples
///
/// ```
/// # use rust_block_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_block_logger::notice;
/// notice!(logger, "Resource usage high: {}%", 85);
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log an error-level message.
///
/// To log an error value rather than text, pass it as context or use
/// [`Logger::event`](crate::Logger::event) with [`LoggableValue::error`](crate::LoggableValue::error).
///
/// # Examples
///
/// ```
/// # use rust_block_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_block_logger::error;
/// let failure = std::io::Error::other("connection reset");
/// error!(logger, context: LoggableValue::error(failure), "Upload failed");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fault-level message.
///
/// # Examples
///
/// ```
/// # use rust_block_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_block_logger::fault;
/// fault!(logger, "Invariant violated: {}", "negative balance");
/// ```
#[macro_export]
macro_rules! fault {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fault, $($arg)+)
    };
}
