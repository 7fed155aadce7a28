//! §4.B Finding Extractor and §4.C File Counter.

use crate::error::EngineError;
use crate::model::{CopyrightFinding, LicenseFinding, TextLocation};
use crate::raw::RawTree;

/// Compute the license id for one raw license entry (§4.B license-id rule).
///
/// 1. `spdx_license_key` wins if non-empty.
/// 2. Otherwise `key == "unknown"` becomes `NOASSERTION`.
/// 3. Otherwise synthesize `LicenseRef-<scanner>-<key>`.
fn license_id(
    spdx_license_key: Option<&str>,
    key: Option<&str>,
    scanner_name: &str,
) -> String {
    if let Some(spdx) = spdx_license_key {
        if !spdx.is_empty() {
            return spdx.to_string();
        }
    }

    match key {
        Some("unknown") | None => "NOASSERTION".to_string(),
        Some(key) => format!("LicenseRef-{}-{}", scanner_name.to_lowercase(), key),
    }
}

/// Walk `tree.files[*].licenses` and emit one `LicenseFinding` per entry.
pub fn extract_license_findings(tree: &RawTree, scanner_name: &str) -> Vec<LicenseFinding> {
    let mut findings = Vec::new();
    for file in &tree.files {
        for entry in &file.licenses {
            let license = license_id(
                entry.spdx_license_key.as_deref(),
                entry.key.as_deref(),
                scanner_name,
            );
            findings.push(LicenseFinding {
                license,
                location: TextLocation::new(file.path.clone(), entry.start_line, entry.end_line),
            });
        }
    }
    tracing::debug!("extracted {} license findings", findings.len());
    findings
}

/// Walk `tree.files[*].copyrights` and emit one `CopyrightFinding` per statement. A single entry
/// may carry several statements (modern `statements` shape); each gets its own finding sharing
/// the entry's location.
pub fn extract_copyright_findings(tree: &RawTree) -> Vec<CopyrightFinding> {
    let mut findings = Vec::new();
    for file in &tree.files {
        for entry in &file.copyrights {
            let location = TextLocation::new(file.path.clone(), entry.start_line, entry.end_line);
            for statement in entry.statement_texts() {
                findings.push(CopyrightFinding {
                    statement,
                    location: location.clone(),
                });
            }
        }
    }
    tracing::debug!("extracted {} copyright findings", findings.len());
    findings
}

/// §4.C: prefer `headers[*].extra_data.files_count[0]`, fall back to top-level `files_count`.
pub fn file_count(tree: &RawTree) -> Result<u64, EngineError> {
    for header in &tree.headers {
        if let Some(count) = header.extra_data.files_count.first() {
            return Ok(*count);
        }
    }

    tree.files_count.ok_or(EngineError::MissingFileCount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawCopyrightEntry, RawFile, RawHeader, RawLicenseEntry, RawExtraData};

    fn raw_license(spdx: Option<&str>, key: Option<&str>, start: u32, end: u32) -> RawLicenseEntry {
        RawLicenseEntry {
            spdx_license_key: spdx.map(str::to_string),
            key: key.map(str::to_string),
            start_line: start,
            end_line: end,
        }
    }

    #[test]
    fn license_id_prefers_spdx_key() {
        assert_eq!(license_id(Some("MIT"), Some("mit"), "ScanCode"), "MIT");
    }

    #[test]
    fn license_id_maps_unknown_key_to_noassertion() {
        assert_eq!(license_id(None, Some("unknown"), "ScanCode"), "NOASSERTION");
        assert_eq!(license_id(Some(""), Some("unknown"), "ScanCode"), "NOASSERTION");
    }

    #[test]
    fn license_id_synthesizes_license_ref_for_non_spdx_key() {
        // S4 — unknown key, scanner name ScanCode.
        assert_eq!(
            license_id(Some(""), Some("my-proprietary"), "ScanCode"),
            "LicenseRef-scancode-my-proprietary"
        );
    }

    #[test]
    fn extract_license_findings_walks_all_files() {
        let tree = RawTree {
            headers: vec![],
            files_count: None,
            files: vec![RawFile {
                path: "a.c".to_string(),
                licenses: vec![raw_license(Some("MIT"), None, 1, 1)],
                copyrights: vec![],
                scan_errors: vec![],
            }],
        };

        let findings = extract_license_findings(&tree, "ScanCode");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].license, "MIT");
        assert_eq!(findings[0].location, TextLocation::new("a.c", 1, 1));
    }

    #[test]
    fn extract_copyright_findings_expands_statements_list() {
        let tree = RawTree {
            headers: vec![],
            files_count: None,
            files: vec![RawFile {
                path: "a.c".to_string(),
                licenses: vec![],
                copyrights: vec![RawCopyrightEntry {
                    statements: Some(vec!["Copyright A".into(), "Copyright B".into()]),
                    value: None,
                    start_line: 1,
                    end_line: 1,
                }],
                scan_errors: vec![],
            }],
        };

        let findings = extract_copyright_findings(&tree);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].statement, "Copyright A");
        assert_eq!(findings[1].statement, "Copyright B");
    }

    #[test]
    fn extract_copyright_findings_falls_back_to_value_field() {
        let tree = RawTree {
            headers: vec![],
            files_count: None,
            files: vec![RawFile {
                path: "a.c".to_string(),
                licenses: vec![],
                copyrights: vec![RawCopyrightEntry {
                    statements: None,
                    value: Some("Copyright Legacy".into()),
                    start_line: 2,
                    end_line: 2,
                }],
                scan_errors: vec![],
            }],
        };

        let findings = extract_copyright_findings(&tree);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].statement, "Copyright Legacy");
    }

    #[test]
    fn file_count_prefers_header_shape() {
        let tree = RawTree {
            headers: vec![RawHeader {
                extra_data: RawExtraData {
                    files_count: vec![42],
                },
            }],
            files_count: Some(1),
            files: vec![],
        };
        assert_eq!(file_count(&tree).unwrap(), 42);
    }

    #[test]
    fn file_count_falls_back_to_legacy_shape() {
        let tree = RawTree {
            headers: vec![],
            files_count: Some(7),
            files: vec![],
        };
        assert_eq!(file_count(&tree).unwrap(), 7);
    }

    #[test]
    fn file_count_is_fatal_when_absent() {
        let tree = RawTree::empty();
        assert!(matches!(file_count(&tree), Err(EngineError::MissingFileCount)));
    }
}
