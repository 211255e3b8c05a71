//! Property-based tests for rust_log_facade using proptest

use proptest::prelude::*;
use rust_log_facade::core::layout::{render_columns, shorten, Column, LINE_SEPARATOR};
use rust_log_facade::core::placeholder::{format_placeholders, PLACEHOLDER_OVERFLOW};
use rust_log_facade::prelude::*;
use std::fmt::Display;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::All),
        Just(LogLevel::DeepTrace),
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::None),
    ]
}

fn message_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::MESSAGE_LEVELS.to_vec())
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Ordering of levels agrees with ordering of ranks
    #[test]
    fn test_level_ordering_matches_rank(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.rank() <= b.rank());
        prop_assert_eq!(a == b, a.rank() == b.rank());
    }

    /// A call is queued iff its rank reaches the threshold rank
    #[test]
    fn test_threshold_admits_by_rank(threshold in any_level(), level in message_level()) {
        let logger = Logger::builder().threshold(threshold).build();
        logger.log(level, "probe", &[]);

        let expected = usize::from(threshold.rank() <= level.rank());
        prop_assert_eq!(logger.pending(Channel::Output), expected);
    }

    /// Display output parses back to the same level
    #[test]
    fn test_level_display_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_string().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }
}

// ============================================================================
// Placeholder Tests
// ============================================================================

proptest! {
    /// Enough values fill every marker; too few replace the whole message
    #[test]
    fn test_substitution_count_contract(
        chunks in prop::collection::vec("[a-z ]{0,6}", 1..6),
        values in prop::collection::vec(0u32..1000, 0..8),
    ) {
        let template = chunks.join("{}");
        let markers = chunks.len() - 1;
        let args: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();

        let result = format_placeholders(&template, &args);

        if values.len() < markers {
            prop_assert_eq!(result, PLACEHOLDER_OVERFLOW);
        } else {
            let mut expected = chunks[0].clone();
            for (chunk, value) in chunks[1..].iter().zip(&values) {
                expected.push_str(&value.to_string());
                expected.push_str(chunk);
            }
            prop_assert_eq!(result, expected);
        }
    }

    /// Templates without markers pass through unchanged
    #[test]
    fn test_plain_text_unchanged(text in "[^{}]{0,40}") {
        prop_assert_eq!(format_placeholders(&text, &[&1]), text);
    }
}

// ============================================================================
// Layout Tests
// ============================================================================

proptest! {
    /// Shortening always yields exactly the requested width
    #[test]
    fn test_shorten_exact_width(text in "\\PC{0,30}", width in 0usize..20) {
        prop_assert_eq!(shorten(&text, width).chars().count(), width);
    }

    /// Over-long text keeps its tail behind two dots
    #[test]
    fn test_shorten_keeps_tail(text in "[a-z]{11,30}") {
        let shortened = shorten(&text, 10);
        prop_assert!(shortened.starts_with(".."));
        prop_assert!(text.ends_with(&shortened[2..]));
    }

    /// Capped wrapping of unbroken text yields full chunks plus a padded tail
    #[test]
    fn test_capped_wrap_chunks(text in "[a-z0-9]{1,60}", cap in 1usize..12) {
        let lines = Column::capped(text.clone(), cap).wrap();

        prop_assert_eq!(lines.len(), text.len().div_ceil(cap));
        for line in &lines {
            prop_assert_eq!(line.chars().count(), cap);
        }
        let joined: String = lines.concat();
        prop_assert_eq!(joined.trim_end(), text.as_str());
    }

    /// One output row per line of the tallest column
    #[test]
    fn test_row_count_is_tallest_column(
        left in prop::collection::vec("[a-z]{1,8}", 1..5),
        right in prop::collection::vec("[a-z]{1,8}", 1..5),
    ) {
        let out = render_columns(&[
            Column::natural(left.join("\n")),
            Column::natural(right.join("\n")),
        ]);

        prop_assert!(out.ends_with(LINE_SEPARATOR));
        let rows = out.trim_end_matches(LINE_SEPARATOR).split(LINE_SEPARATOR).count();
        prop_assert_eq!(rows, left.len().max(right.len()));
    }
}
