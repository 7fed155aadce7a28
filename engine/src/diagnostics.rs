//! §4.G Error Mapper: classify and compact unknown-error and timeout diagnostics, and decide
//! whether an apparent process failure should still be reported as a successful scan.

use regex::Regex;

use crate::model::Diagnostic;

fn unknown_error_regex() -> Regex {
    Regex::new(
        r"(?s)(?:ERROR: for scanner: (?P<scanner>[^:\n]+):\n)?ERROR: Unknown error:\n.+\n(?P<error>[A-Za-z]+)(?:\n|:)(?P<message>.*?) \(File: (?P<file>[^)]+)\)",
    )
    .expect("unknown-error pattern is a compile-time constant")
}

fn timeout_regex() -> Regex {
    Regex::new(
        r"(?:ERROR: for scanner: (?P<scanner>[^:\n]+):\n)?ERROR: Processing interrupted: timeout after (?P<timeout>\d+) seconds\. \(File: (?P<file>[^)]+)\)",
    )
    .expect("timeout pattern is a compile-time constant")
}

/// Rewrite every diagnostic message matching the unknown-error pattern, deduplicate by message
/// text (first occurrence wins), and report whether the list is "memory-only": non-empty on
/// entry, every entry matched, and every match was a `MemoryError`.
///
/// The regex is applied once per diagnostic entry — never re-split across newlines — matching the
/// spec's atomicity requirement for pathological multi-file dumps.
pub fn map_unknown_errors(diagnostics: &mut Vec<Diagnostic>) -> bool {
    let re = unknown_error_regex();
    let had_entries = !diagnostics.is_empty();
    let mut all_matched = true;
    let mut all_memory = true;

    for diagnostic in diagnostics.iter_mut() {
        match re.captures(&diagnostic.message) {
            Some(caps) => {
                let error = &caps["error"];
                let file = &caps["file"];
                if error == "MemoryError" {
                    diagnostic.message = format!("ERROR: MemoryError while scanning file '{}'.", file);
                } else {
                    all_memory = false;
                    let message = caps["message"].trim();
                    diagnostic.message =
                        format!("ERROR: {} while scanning file '{}' ({}).", error, file, message);
                }
            }
            None => {
                all_matched = false;
                all_memory = false;
            }
        }
    }

    dedup_by_message(diagnostics);

    had_entries && all_matched && all_memory
}

/// Rewrite every diagnostic message matching the timeout pattern where `<timeout>` equals
/// `configured_timeout`, deduplicate by message text, and report whether every entry matched.
pub fn map_timeout_errors(diagnostics: &mut Vec<Diagnostic>, configured_timeout: u64) -> bool {
    let re = timeout_regex();
    let mut all_matched = !diagnostics.is_empty();

    for diagnostic in diagnostics.iter_mut() {
        match re.captures(&diagnostic.message) {
            Some(caps) if caps["timeout"].parse::<u64>().ok() == Some(configured_timeout) => {
                let file = &caps["file"];
                diagnostic.message = format!(
                    "ERROR: Timeout after {} seconds while scanning file '{}'.",
                    configured_timeout, file
                );
            }
            _ => all_matched = false,
        }
    }

    dedup_by_message(diagnostics);

    all_matched
}

fn dedup_by_message(diagnostics: &mut Vec<Diagnostic>) {
    let mut seen = std::collections::HashSet::new();
    diagnostics.retain(|d| seen.insert(d.message.clone()));
}

/// Whether a scan should be reported as a success (§4.G "Invoker contract").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Success,
    Fatal(String),
}

/// Apply both mapping passes in sequence and decide the scan outcome per the Invoker contract: a
/// scan succeeds if the process exited cleanly, or either mapping pass reports homogeneity.
pub fn scan_outcome(
    process_exit_clean: bool,
    process_error_message: &str,
    diagnostics: &mut Vec<Diagnostic>,
    configured_timeout: u64,
) -> ScanOutcome {
    let memory_only = map_unknown_errors(diagnostics);
    let timeout_only = map_timeout_errors(diagnostics, configured_timeout);

    if process_exit_clean || memory_only || timeout_only {
        ScanOutcome::Success
    } else {
        ScanOutcome::Fatal(process_error_message.to_string())
    }
}
