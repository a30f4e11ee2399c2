//! Basic logger usage example
//!
//! Demonstrates block logging to the console at every severity, context
//! values, registered error formatters and private blocks.
//!
//! Run with: cargo run --example basic_usage

use rust_block_logger::prelude::*;
use rust_block_logger::{debug, global, info, notice};
use std::fmt;

#[derive(Debug)]
enum CheckoutError {
    CardDeclined { last4: &'static str },
    OutOfStock(u32),
}

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutError::CardDeclined { last4 } => write!(f, "card ending {} was declined", last4),
            CheckoutError::OutOfStock(sku) => write!(f, "item {} is out of stock", sku),
        }
    }
}

impl std::error::Error for CheckoutError {}

fn main() -> Result<()> {
    println!("=== Rust Block Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .sink(ConsoleSink::new())
        .timestamp_format(TimestampFormat::Readable)
        .build();

    println!("1. Logging at different severities:");
    logger.info(|| "This is an info message");
    logger.debug(|| "This is a debug message");
    logger.verbose(|| "This is a verbose message");
    logger.notice(|| "This is a notice message");
    logger.error(|| "This is an error message");
    logger.fault(|| "This is a fault message");

    println!("\n2. Macros with format arguments and context:");
    let port = 8080;
    info!(logger, "Listening on port {}", port);
    notice!(logger, context: 1250, "Slow request to {}", "/checkout");

    println!("\n3. Errors before and after registering a formatter:");
    let declined = || LoggableValue::error(CheckoutError::CardDeclined { last4: "4242" });
    logger.error(declined);

    logger.add_formatter(FnErrorFormatter::new("Checkout", |e: &CheckoutError| {
        match e {
            CheckoutError::CardDeclined { last4 } => vec![
                ("Reason".to_string(), "declined".into()),
                ("Card".to_string(), (*last4).into()),
            ],
            CheckoutError::OutOfStock(sku) => vec![
                ("Reason".to_string(), "out of stock".into()),
                ("Sku".to_string(), (*sku).into()),
            ],
        }
    }));
    logger.error(declined);
    logger.info_with_context(
        || "Cart adjusted",
        LoggableValue::error(CheckoutError::OutOfStock(1182)),
    );

    println!("\n4. Private blocks:");
    logger
        .event(Severity::Notice)
        .private(true)
        .log(|| "Session token rotated");

    println!("\n5. Process-wide logger:");
    debug!(global::logger(), "Global logger ready");

    logger.flush()?;

    let metrics = logger.metrics();
    println!(
        "\nLogged {} blocks, {} failed writes",
        metrics.total_logged(),
        metrics.failed_writes()
    );
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
