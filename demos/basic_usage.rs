//! Basic facade usage example
//!
//! Demonstrates buffering before any sink exists, attaching console sinks,
//! and reporting a failure on the error channel.
//!
//! Run with: cargo run --example basic_usage

use rust_log_facade::prelude::*;
use rust_log_facade::{error, info};

fn main() -> Result<()> {
    println!("=== Rust Log Facade - Basic Usage Example ===\n");

    // No sinks yet: everything admitted by the threshold is queued
    let logger = Logger::builder()
        .threshold(LogLevel::Debug)
        .timestamps(true)
        .build();

    println!("1. Logging before a sink is attached:");
    logger.debug("Loading configuration from {}", &[&"settings.toml"]);
    info!(logger, "Indexed {} files in {}ms", 128, 42);
    logger.trace("Trace message (filtered)", &[]);
    println!(
        "   {} messages queued on the output channel",
        logger.pending(Channel::Output)
    );

    println!("\n2. Attaching console sinks drains the queue in order:");
    logger.connect_output_sink(ConsoleSink::stdout());
    logger.connect_error_sink(ConsoleSink::stderr());
    logger.warn("Workspace contains {} unresolved imports", &[&3]);

    println!("\n3. Reporting a failure on the error channel:");
    let failure = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml not found");
    logger.report(&failure);
    error!(logger, "Falling back to defaults after {} attempts", 2);

    println!("\n4. Threshold can be changed at runtime:");
    logger.set_threshold("warn".parse()?);
    logger.info("Info message (hidden)", &[]);
    logger.error("Error message (visible)", &[]);

    let metrics = logger.metrics();
    println!(
        "\n   delivered: {}, drained: {}, filtered: {}",
        metrics.delivered_count(),
        metrics.drained_count(),
        metrics.filtered_count()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
