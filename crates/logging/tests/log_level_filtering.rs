//! Integration tests for threshold filtering, the PRINT bypass, and the
//! source-location prefix rules.

mod common;

use common::CaptureOutputter;
use logfan::{Level, Logger, SourceLocation};

// ============================================================================
// Threshold Semantics
// ============================================================================

/// Verifies a message less urgent than the threshold is discarded.
#[test]
fn debug_is_discarded_at_info_threshold() {
    let logger = Logger::new();
    assert!(logger.set_filter_name("INFO"));
    let (outputter, records) = CaptureOutputter::new();
    logger.insert(outputter, false);

    logger.print(None, Level::Debug, format_args!("dropped"));

    assert!(records.lock().unwrap().is_empty());
}

/// Verifies a message more urgent than the threshold still dispatches.
#[test]
fn warn_dispatches_at_info_threshold() {
    let logger = Logger::new();
    assert!(logger.set_filter_name("INFO"));
    let (outputter, records) = CaptureOutputter::new();
    logger.insert(outputter, false);

    logger.print(None, Level::Warn, format_args!("kept"));

    let records = records.lock().unwrap();
    assert_eq!(records.as_slice(), &[(Level::Warn, "kept".to_owned())]);
}

/// Verifies a message exactly at the threshold dispatches.
#[test]
fn threshold_level_itself_dispatches() {
    let logger = Logger::new();
    logger.set_filter(Level::Note);
    let (outputter, records) = CaptureOutputter::new();
    logger.insert(outputter, false);

    logger.print(None, Level::Note, format_args!("boundary"));

    assert_eq!(records.lock().unwrap().len(), 1);
}

/// Verifies no outputter is invoked at all for a filtered message.
#[test]
fn filtered_message_reaches_no_sequence() {
    let logger = Logger::new();
    logger.set_filter(Level::Crit);
    let (head, head_records) = CaptureOutputter::new();
    let (normal, normal_records) = CaptureOutputter::new();
    logger.insert(head, true);
    logger.insert(normal, false);

    logger.print(None, Level::Err, format_args!("below threshold"));

    assert!(head_records.lock().unwrap().is_empty());
    assert!(normal_records.lock().unwrap().is_empty());
}

// ============================================================================
// PRINT Bypass
// ============================================================================

/// Verifies PRINT dispatches regardless of the threshold.
#[test]
fn print_level_bypasses_any_threshold() {
    let logger = Logger::new();
    logger.set_filter_ordinal(-2);
    let (outputter, records) = CaptureOutputter::new();
    logger.insert(outputter, false);

    logger.print(None, Level::Print, format_args!("always"));

    let records = records.lock().unwrap();
    assert_eq!(records.as_slice(), &[(Level::Print, "always".to_owned())]);
}

/// Verifies PRINT never carries a source-location prefix.
#[test]
fn print_level_never_gets_a_location_prefix() {
    let logger = Logger::new();
    let (outputter, records) = CaptureOutputter::new();
    logger.insert(outputter, false);

    let location = SourceLocation::new("src/app.rs", 7);
    logger.print(Some(location), Level::Print, format_args!("banner"));

    let records = records.lock().unwrap();
    assert_eq!(records.as_slice(), &[(Level::Print, "banner".to_owned())]);
}

// ============================================================================
// Location Prefix
// ============================================================================

/// Verifies the "<file>:<line>: " prefix shape for filterable levels.
#[test]
fn location_prefix_has_exact_shape() {
    let logger = Logger::new();
    logger.set_filter(Level::Debug5);
    let (outputter, records) = CaptureOutputter::new();
    logger.insert(outputter, false);

    logger.print(
        Some(SourceLocation::new("src/app.rs", 31)),
        Level::Err,
        format_args!("bad state"),
    );

    let records = records.lock().unwrap();
    assert_eq!(records[0].1, "src/app.rs:31: bad state");
}

/// Verifies a missing location produces the bare message.
#[test]
fn no_location_means_no_prefix() {
    let logger = Logger::new();
    logger.set_filter(Level::Debug5);
    let (outputter, records) = CaptureOutputter::new();
    logger.insert(outputter, false);

    logger.print(None, Level::Err, format_args!("bare"));

    assert_eq!(records.lock().unwrap()[0].1, "bare");
}

// ============================================================================
// Legacy Tagged Call Sites
// ============================================================================

/// Verifies tagged strings are filtered by their embedded marker level.
#[test]
fn tagged_messages_respect_the_threshold() {
    let logger = Logger::new();
    logger.set_filter(Level::Warn);
    let (outputter, records) = CaptureOutputter::new();
    logger.insert(outputter, false);

    logger.print_tagged(None, "@z5too verbose"); // DEBUG
    logger.print_tagged(None, "@z0meltdown"); // CRIT
    logger.print_tagged(None, "@z/hello"); // PRINT, unfiltered

    let records = records.lock().unwrap();
    assert_eq!(
        records.as_slice(),
        &[
            (Level::Crit, "meltdown".to_owned()),
            (Level::Print, "hello".to_owned()),
        ]
    );
}
