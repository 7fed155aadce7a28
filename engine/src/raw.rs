//! Typed view over the raw ScanCode result JSON, tolerant of schema drift across tool versions.
//!
//! Field presence varies across ScanCode releases (see §3/§6 of the spec): `copyrights[].value`
//! was replaced by `copyrights[].statements`, and the file count migrated from a top-level
//! `files_count` into `headers[].extra_data.files_count`. Both shapes are accepted here via
//! `#[serde(default)]` optional fields rather than rejecting the older one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawTree {
    #[serde(default)]
    pub headers: Vec<RawHeader>,
    #[serde(default)]
    pub files_count: Option<u64>,
    #[serde(default)]
    pub files: Vec<RawFile>,
}

impl RawTree {
    /// The sentinel used when the result file is missing, not a regular file, or empty.
    /// Every field access on it behaves as "nothing was reported".
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawHeader {
    #[serde(default)]
    pub extra_data: RawExtraData,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawExtraData {
    #[serde(default)]
    pub files_count: Vec<u64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawFile {
    pub path: String,
    #[serde(default)]
    pub licenses: Vec<RawLicenseEntry>,
    #[serde(default)]
    pub copyrights: Vec<RawCopyrightEntry>,
    #[serde(default)]
    pub scan_errors: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawLicenseEntry {
    #[serde(default)]
    pub spdx_license_key: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    pub start_line: u32,
    pub end_line: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawCopyrightEntry {
    #[serde(default)]
    pub statements: Option<Vec<String>>,
    #[serde(default)]
    pub value: Option<String>,
    pub start_line: u32,
    pub end_line: u32,
}

impl RawCopyrightEntry {
    /// `statements` when present (modern shape), else the single-element `[value]` (older shape).
    /// Absent both: no statements are reported for this entry.
    pub fn statement_texts(&self) -> Vec<String> {
        if let Some(statements) = &self.statements {
            return statements.clone();
        }
        match &self.value {
            Some(value) => vec![value.clone()],
            None => Vec::new(),
        }
    }
}
