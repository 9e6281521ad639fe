//! Parser warnings with colored terminal output.
//!
//! Provides deduplication so that a document repeating the same lenient
//! construct reports it once. Used by the HTML and DOM crates for situations
//! that are accepted but worth surfacing (a raw-text element missing its
//! closing tag, a duplicate attribute, a replaced custom handler).

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Most messages kept for deduplication and [`recorded_warnings`]. Older
/// entries are evicted first, so a long-running process stays bounded.
pub const MAX_RECORDED_WARNINGS: usize = 256;

/// Messages already reported, in first-seen order.
struct WarningLog {
    seen: Option<HashSet<String>>,
    ordered: VecDeque<String>,
}

static WARNED: Mutex<WarningLog> = Mutex::new(WarningLog {
    seen: None,
    ordered: VecDeque::new(),
});

/// When set, warnings are recorded but not written to stderr.
static QUIET: AtomicBool = AtomicBool::new(false);

fn log() -> MutexGuard<'static, WarningLog> {
    // A panic while holding the lock cannot leave the log half-updated,
    // so a poisoned guard is still usable.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about a tolerated irregularity (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("HTML Parser", "raw-text element <script> opened at 3:1 is never closed");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let mut guard = log();
    let entries = &mut *guard;
    let seen = entries.seen.get_or_insert_with(HashSet::new);
    if !seen.insert(key.clone()) {
        return;
    }
    entries.ordered.push_back(key);
    while entries.ordered.len() > MAX_RECORDED_WARNINGS {
        if let Some(oldest) = entries.ordered.pop_front() {
            let _ = seen.remove(&oldest);
        }
    }
    drop(guard);

    if !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[marktree {component}] ⚠ {message}").yellow());
    }
}

/// Silence (or re-enable) stderr output. Warnings are still recorded.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// The most recent warnings (at most [`MAX_RECORDED_WARNINGS`]) since the
/// last [`clear_warnings`], oldest first, formatted as `[component] message`.
#[must_use]
pub fn recorded_warnings() -> Vec<String> {
    log().ordered.iter().cloned().collect()
}

/// Clear all recorded warnings (call before parsing an unrelated document).
pub fn clear_warnings() {
    let mut guard = log();
    if let Some(set) = guard.seen.as_mut() {
        set.clear();
    }
    guard.ordered.clear();
}
