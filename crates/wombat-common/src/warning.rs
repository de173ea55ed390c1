//! Resolver warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the cascade, the stylesheet loader and the style mapper to report
//! input that was skipped. Warnings never change a resolution result; they
//! only make silent recovery visible.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Most distinct messages kept between calls to [`clear_warnings`].
///
/// Messages quote the offending input, so a long-running host would
/// otherwise grow the log with every new malformed value.
pub const MAX_RECORDED_WARNINGS: usize = 1024;

/// Recorded in place of every message past the cap.
const SUPPRESSED: &str = "[Warning] further warnings suppressed";

/// Messages recorded so far, in first-seen order.
#[derive(Default)]
struct WarningLog {
    seen: HashSet<String>,
    order: Vec<String>,
}

/// What [`WarningLog::record`] did with a message.
#[derive(Debug, PartialEq, Eq)]
enum Recorded {
    New,
    Duplicate,
    /// The log just filled up; later messages are dropped silently.
    Suppressed,
}

impl WarningLog {
    fn record(&mut self, key: String, cap: usize) -> Recorded {
        if self.seen.contains(&key) {
            return Recorded::Duplicate;
        }
        if self.seen.len() >= cap {
            if self.order.last().is_some_and(|last| last == SUPPRESSED) {
                return Recorded::Duplicate;
            }
            self.order.push(SUPPRESSED.to_string());
            return Recorded::Suppressed;
        }
        let _ = self.seen.insert(key.clone());
        self.order.push(key);
        Recorded::New
    }
}

/// Global set of warnings we've already recorded (to deduplicate)
static WARNED: Mutex<Option<WarningLog>> = Mutex::new(None);

/// Whether recorded warnings are also echoed to stderr.
static ECHO: AtomicBool = AtomicBool::new(true);

fn log() -> MutexGuard<'static, Option<WarningLog>> {
    // A panic while holding the lock cannot leave the log half-written in a
    // way that matters, so a poisoned lock is still usable.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about skipped input (recorded once per unique message)
///
/// # Example
/// ```
/// use wombat_common::warning::warn_once;
///
/// warn_once("Style", "unknown unit 'em' in 'padding: 1.5em'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let mut guard = log();
    let log = guard.get_or_insert_with(WarningLog::default);
    let recorded = log.record(key, MAX_RECORDED_WARNINGS);
    if !ECHO.load(Ordering::Relaxed) {
        return;
    }

    match recorded {
        Recorded::New => eprintln!("{YELLOW}[Wombat {component}] ⚠ {message}{RESET}"),
        Recorded::Suppressed => eprintln!("{YELLOW}[Wombat] ⚠ further warnings suppressed{RESET}"),
        Recorded::Duplicate => {}
    }
}

/// Enable or disable echoing warnings to stderr.
///
/// Warnings are still recorded while echo is off, so
/// [`recorded_warnings`] keeps working.
pub fn set_warnings_enabled(enabled: bool) {
    ECHO.store(enabled, Ordering::Relaxed);
}

/// Snapshot of every warning recorded so far, formatted as
/// `[component] message`, in first-seen order. Past
/// [`MAX_RECORDED_WARNINGS`] distinct messages, one
/// `further warnings suppressed` entry stands in for the rest.
#[must_use]
pub fn recorded_warnings() -> Vec<String> {
    log().as_ref().map(|log| log.order.clone()).unwrap_or_default()
}

/// Clear all recorded warnings (call before resolving a new document)
pub fn clear_warnings() {
    if let Some(log) = log().as_mut() {
        log.seen.clear();
        log.order.clear();
    }
}
