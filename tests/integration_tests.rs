//! Integration tests for the logging facade
//!
//! These tests verify:
//! - Threshold filtering
//! - Buffering before sink attachment and in-order drain
//! - Sink replacement
//! - Sinks that log while their queue drains
//! - Error channel reporting
//! - Rendered column layout

use parking_lot::Mutex;
use rust_log_facade::core::layout::{render_columns, Column, LINE_SEPARATOR};
use rust_log_facade::core::placeholder::PLACEHOLDER_OVERFLOW;
use rust_log_facade::prelude::*;
use std::sync::Arc;

/// Sink that keeps every delivered message
#[derive(Clone, Default)]
struct CollectingSink {
    messages: Arc<Mutex<Vec<LogMessage>>>,
}

impl CollectingSink {
    fn texts(&self) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .map(|m| message_body(m.message()))
            .collect()
    }

    fn len(&self) -> usize {
        self.messages.lock().len()
    }
}

impl Sink for CollectingSink {
    fn deliver(&self, message: LogMessage) {
        self.messages.lock().push(message);
    }
}

/// Message column of a single-row rendering
fn message_body(rendered: &str) -> String {
    let row = rendered.trim_end_matches(LINE_SEPARATOR);
    row[12..].to_string()
}

#[test]
fn test_threshold_filters_every_level() {
    let thresholds = [
        LogLevel::All,
        LogLevel::DeepTrace,
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::None,
    ];

    for threshold in thresholds {
        let sink = CollectingSink::default();
        let logger = Logger::builder()
            .threshold(threshold)
            .output_sink(sink.clone())
            .build();

        for level in LogLevel::MESSAGE_LEVELS {
            logger.log(level, "message", &[]);
        }

        let expected = LogLevel::MESSAGE_LEVELS
            .iter()
            .filter(|level| threshold.rank() <= level.rank())
            .count();
        assert_eq!(sink.len(), expected, "threshold {}", threshold);
    }
}

#[test]
fn test_queued_messages_precede_later_ones() {
    let logger = Logger::new();
    logger.info("first", &[]);
    logger.info("second {}", &[&2]);
    logger.info("third", &[]);
    assert_eq!(logger.pending(Channel::Output), 3);

    let sink = CollectingSink::default();
    logger.connect_output_sink(sink.clone());
    logger.info("fourth", &[]);

    assert_eq!(sink.texts(), vec!["first", "second 2", "third", "fourth"]);
    assert_eq!(logger.pending(Channel::Output), 0);
    assert_eq!(logger.metrics().buffered_count(), 3);
    assert_eq!(logger.metrics().drained_count(), 3);
    assert_eq!(logger.metrics().delivered_count(), 1);
}

#[test]
fn test_replacing_sink_stops_old_and_skips_drained() {
    let logger = Logger::new();
    logger.warn("queued", &[]);

    let first = CollectingSink::default();
    logger.connect_output_sink(first.clone());
    logger.warn("to first", &[]);

    let second = CollectingSink::default();
    logger.connect_output_sink(second.clone());
    logger.warn("to second", &[]);

    assert_eq!(first.texts(), vec!["queued", "to first"]);
    assert_eq!(second.texts(), vec!["to second"]);
}

#[test]
fn test_sink_logging_during_drain_completes() {
    let logger = Arc::new(Logger::builder().threshold(LogLevel::Debug).build());
    logger.info("queued", &[]);

    let sink = CollectingSink::default();
    let forwarding = {
        let logger = Arc::clone(&logger);
        let sink = sink.clone();
        move |msg: LogMessage| {
            if message_body(msg.message()) == "queued" {
                logger.debug("transport opened", &[]);
                logger.warn("transport slow", &[]);
            }
            sink.deliver(msg);
        }
    };

    let (done_tx, done_rx) = std::sync::mpsc::channel();
    let attaching = Arc::clone(&logger);
    std::thread::spawn(move || {
        let _ = done_tx.send(attaching.connect_sink(Channel::Output, Arc::new(forwarding)));
    });
    let drained = done_rx
        .recv_timeout(std::time::Duration::from_secs(5))
        .expect("connecting the sink did not finish");

    assert_eq!(drained, 3);
    assert_eq!(sink.texts(), vec!["queued", "transport opened", "transport slow"]);
    assert_eq!(logger.metrics().outstanding(), 0);
}

#[test]
fn test_channels_are_independent() {
    let logger = Logger::new();
    logger.info("out", &[]);
    logger.report_trace("err");

    let out = CollectingSink::default();
    logger.connect_output_sink(out.clone());
    assert_eq!(out.texts(), vec!["out"]);
    assert_eq!(logger.pending(Channel::Error), 1);
    assert!(!logger.is_attached(Channel::Error));

    let err = CollectingSink::default();
    logger.connect_error_sink(err.clone());
    assert_eq!(err.texts(), vec!["err"]);
}

#[test]
fn test_report_io_error() {
    let err = CollectingSink::default();
    let logger = Logger::builder().error_sink(err.clone()).build();

    let failure = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    logger.report(&failure);

    let messages = err.messages.lock();
    assert_eq!(messages[0].level(), LogLevel::Error);
    assert!(messages[0].message().contains("access denied"));
}

#[test]
fn test_placeholder_overflow_is_logged() {
    let sink = CollectingSink::default();
    let logger = Logger::builder().output_sink(sink.clone()).build();

    logger.info("{} and {}", &[&"one"]);
    logger.info("{}", &[&"one", &"ignored"]);

    assert_eq!(sink.texts(), vec![PLACEHOLDER_OVERFLOW, "one"]);
}

#[test]
fn test_rendered_rows_align_multiline_messages() {
    let sink = CollectingSink::default();
    let logger = Logger::builder().output_sink(sink.clone()).build();

    logger.info("line one\nline two", &[]);

    let messages = sink.messages.lock();
    let rows: Vec<&str> = messages[0]
        .message()
        .trim_end_matches(LINE_SEPARATOR)
        .split(LINE_SEPARATOR)
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][12..], "line one");
    assert_eq!(rows[1], format!("{}line two", " ".repeat(12)));
}

#[test]
fn test_column_merge_example() {
    let out = render_columns(&[Column::capped("abc", 5), Column::natural("one\ntwo")]);
    assert_eq!(
        out,
        format!("abc    one{sep}       two{sep}", sep = LINE_SEPARATOR)
    );
}

#[test]
fn test_thread_column_uses_thread_name() {
    let sink = CollectingSink::default();
    let logger = Arc::new(Logger::builder().output_sink(sink.clone()).build());

    let worker = Arc::clone(&logger);
    std::thread::Builder::new()
        .name("io".to_string())
        .spawn(move || worker.info("from io", &[]))
        .expect("spawn")
        .join()
        .expect("join");

    let messages = sink.messages.lock();
    assert_eq!(
        messages[0].message(),
        format!("io          from io{LINE_SEPARATOR}")
    );
}

#[test]
fn test_sentinel_levels_are_never_emitted() {
    let sink = CollectingSink::default();
    let logger = Logger::builder()
        .threshold(LogLevel::All)
        .output_sink(sink.clone())
        .build();

    logger.log(LogLevel::All, "all", &[]);
    logger.log(LogLevel::None, "none", &[]);
    logger.dispatch(LogLevel::None, "none");

    assert_eq!(sink.len(), 0);
}
