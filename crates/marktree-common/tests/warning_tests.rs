//! Integration tests for the warning log.
//!
//! The log is process-global, so everything runs in one test.

use marktree_common::warning::{
    MAX_RECORDED_WARNINGS, clear_warnings, recorded_warnings, set_quiet, warn_once,
};

#[test]
fn test_warn_once_records_and_deduplicates() {
    set_quiet(true);
    clear_warnings();

    warn_once("HTML Parser", "first");
    warn_once("HTML Parser", "second");
    warn_once("HTML Parser", "first");
    warn_once("DOM", "first");

    assert_eq!(
        recorded_warnings(),
        vec![
            "[HTML Parser] first".to_string(),
            "[HTML Parser] second".to_string(),
            "[DOM] first".to_string(),
        ]
    );

    clear_warnings();
    assert!(recorded_warnings().is_empty());

    warn_once("HTML Parser", "first");
    assert_eq!(recorded_warnings().len(), 1);

    // Distinct messages past the cap evict the oldest ones.
    clear_warnings();
    for i in 0..MAX_RECORDED_WARNINGS + 10 {
        warn_once("HTML Parser", &format!("message {i}"));
    }
    let recorded = recorded_warnings();
    assert_eq!(recorded.len(), MAX_RECORDED_WARNINGS);
    assert_eq!(recorded[0], "[HTML Parser] message 10");

    // An evicted message is reported again, a retained one is not.
    warn_once("HTML Parser", "message 0");
    warn_once("HTML Parser", "message 20");
    let recorded = recorded_warnings();
    assert_eq!(recorded.len(), MAX_RECORDED_WARNINGS);
    assert_eq!(
        recorded.last().map(String::as_str),
        Some("[HTML Parser] message 0")
    );
    clear_warnings();
}
