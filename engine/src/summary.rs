//! §4.H Summary Builder.

use chrono::{DateTime, Utc};

use crate::model::{Diagnostic, LicenseFindings, ScanSummary};
use crate::raw::RawTree;

/// Concatenate each file's `scan_errors` into the diagnostic list, tagging each with its path via
/// the `"<text> (File: <path>)"` suffix that §4.G's regexes key off of.
pub fn collect_diagnostics(tree: &RawTree) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for file in &tree.files {
        for error in &file.scan_errors {
            diagnostics.push(Diagnostic::new(
                "scan_errors",
                format!("{} (File: {})", error, file.path),
            ));
        }
    }
    diagnostics
}

/// Assemble the final `ScanSummary`. `start_time`/`end_time` are supplied by the caller — this
/// component never reads timestamps out of the raw tree.
pub fn build_summary(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    file_count: u64,
    findings: Vec<LicenseFindings>,
    diagnostics: Vec<Diagnostic>,
) -> ScanSummary {
    ScanSummary {
        start_time,
        end_time,
        file_count,
        findings,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawFile;

    #[test]
    fn collect_diagnostics_tags_each_error_with_its_file_path() {
        let tree = RawTree {
            headers: vec![],
            files_count: None,
            files: vec![RawFile {
                path: "a.c".to_string(),
                licenses: vec![],
                copyrights: vec![],
                scan_errors: vec!["ERROR: boom".to_string()],
            }],
        };

        let diagnostics = collect_diagnostics(&tree);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "ERROR: boom (File: a.c)");
        assert_eq!(diagnostics[0].source, "scan_errors");
    }

    #[test]
    fn build_summary_carries_fields_through_unchanged() {
        let start = Utc::now();
        let end = start;
        let summary = build_summary(start, end, 3, Vec::new(), Vec::new());
        assert_eq!(summary.file_count, 3);
        assert!(summary.findings.is_empty());
        assert!(summary.diagnostics.is_empty());
    }
}
