//! Orchestrator tying components A-I together into a single `scan_path` entry point, the way
//! `FossologyScanner::scan` stages upload → job → fetch → parse in the teacher crate.

use std::path::Path;

use chrono::Utc;

use crate::associate::associate_corpus;
use crate::config::EngineConfig;
use crate::diagnostics::{map_timeout_errors, map_unknown_errors};
use crate::error::EngineError;
use crate::extract::{extract_copyright_findings, extract_license_findings, file_count};
use crate::model::{ScanResult, ScannerDetails};
use crate::options::{serialize_configuration, ScanOptions};
use crate::reader::read_result;
use crate::summary::{build_summary, collect_diagnostics};

/// Ingest the ScanCode result file at `result_path` and produce a `ScanResult`.
///
/// `scanner_name` and `scanner_version` identify the tool that produced the result (used in the
/// `LicenseRef-<scanner>-<key>` synthesis and in `ScannerDetails`). `options` drives §4.I's
/// configuration string.
pub fn scan_path(
    result_path: &Path,
    scanner_name: &str,
    scanner_version: &str,
    options: &ScanOptions,
    config: &EngineConfig,
) -> Result<ScanResult, EngineError> {
    let start_time = Utc::now();

    tracing::info!("reading scan result from {:?}", result_path);
    let (tree, raw) = read_result(result_path)?;

    tracing::info!("extracting findings");
    let licenses = extract_license_findings(&tree, scanner_name);
    let copyrights = extract_copyright_findings(&tree);
    let count = file_count(&tree)?;

    tracing::info!(
        "associating {} license findings with {} copyright findings across {} files",
        licenses.len(),
        copyrights.len(),
        count
    );
    let findings = associate_corpus(
        &licenses,
        &copyrights,
        &config.root_license_globs,
        config.tolerance_lines,
    );

    let mut diagnostics = collect_diagnostics(&tree);
    map_unknown_errors(&mut diagnostics);
    map_timeout_errors(&mut diagnostics, config.timeout_seconds);

    let end_time = Utc::now();
    let summary = build_summary(start_time, end_time, count, findings, diagnostics);

    Ok(ScanResult {
        provenance: None,
        scanner: ScannerDetails {
            name: scanner_name.to_string(),
            version: scanner_version.to_string(),
            configuration: serialize_configuration(options),
        },
        summary,
        raw,
    })
}
