use serde::{Deserialize, Serialize};

/// A span of lines within a single scanned file.
///
/// Paths are forward-slash relative strings as produced by the external tool with
/// `--strip-root`; this type does not normalize them further.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextLocation {
    pub path: String,
    pub start_line: u32,
    pub end_line: u32,
}

impl TextLocation {
    pub fn new(path: impl Into<String>, start_line: u32, end_line: u32) -> Self {
        Self {
            path: path.into(),
            start_line,
            end_line,
        }
    }
}

/// A single license observation at one location in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseFinding {
    pub license: String,
    pub location: TextLocation,
}

/// A single copyright observation at one location in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyrightFinding {
    pub statement: String,
    pub location: TextLocation,
}

/// All locations at which one copyright statement was observed under a given license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyrightFindings {
    pub statement: String,
    pub locations: Vec<TextLocation>,
}

impl CopyrightFindings {
    fn new(statement: String) -> Self {
        Self {
            statement,
            locations: Vec::new(),
        }
    }

    fn insert_sorted(&mut self, location: TextLocation) {
        if let Err(idx) = self.locations.binary_search(&location) {
            self.locations.insert(idx, location);
        }
    }
}

/// Every copyright and every location at which one license was observed across the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseFindings {
    pub license: String,
    pub locations: Vec<TextLocation>,
    pub copyrights: Vec<CopyrightFindings>,
}

/// A diagnostic surfaced from a scan. `severity` is opaque to this engine; it is carried through
/// unchanged from whatever the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub source: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl Diagnostic {
    pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            severity: None,
        }
    }
}

/// The full result of ingesting one scan: timespan, file count, associated findings and
/// diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub file_count: u64,
    pub findings: Vec<LicenseFindings>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Identity and result-affecting configuration of the scanner run that produced a `ScanResult`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerDetails {
    pub name: String,
    pub version: String,
    pub configuration: String,
}

/// Engine output, ready for the Invoker to attach provenance and hand to the results store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Set by the Invoker after the engine returns; the engine never writes to this field.
    pub provenance: Option<String>,
    pub scanner: ScannerDetails,
    pub summary: ScanSummary,
    /// The raw parsed tree, passed through verbatim for archival.
    pub raw: serde_json::Value,
}

/// Build the corpus-level ordered aggregates from per-license location and copyright maps.
///
/// `locations_for_license` and `copyrights_for_license` need not share the same key set; a
/// license appearing in only one of them gets an empty `Vec` on the other side (invariant 2 of
/// §3 still holds because `copyrights_for_license` never contains an empty-location entry).
pub fn build_license_findings(
    mut locations_for_license: std::collections::BTreeMap<String, Vec<TextLocation>>,
    mut copyrights_for_license: std::collections::BTreeMap<String, Vec<CopyrightFindings>>,
) -> Vec<LicenseFindings> {
    let mut licenses: Vec<String> = locations_for_license
        .keys()
        .chain(copyrights_for_license.keys())
        .cloned()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    licenses.sort();

    licenses
        .into_iter()
        .map(|license| LicenseFindings {
            locations: locations_for_license.remove(&license).unwrap_or_default(),
            copyrights: copyrights_for_license.remove(&license).unwrap_or_default(),
            license,
        })
        .collect()
}

pub(crate) fn insert_copyright(
    findings: &mut Vec<CopyrightFindings>,
    statement: &str,
    location: TextLocation,
) {
    match findings.iter_mut().find(|f| f.statement == statement) {
        Some(existing) => existing.insert_sorted(location),
        None => {
            let mut entry = CopyrightFindings::new(statement.to_string());
            entry.insert_sorted(location);
            let idx = findings
                .binary_search_by(|f| f.statement.as_str().cmp(statement))
                .unwrap_or_else(|idx| idx);
            findings.insert(idx, entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_copyright_merges_duplicate_statements() {
        let mut findings = Vec::new();
        insert_copyright(&mut findings, "Copyright Alice", TextLocation::new("a.c", 1, 1));
        insert_copyright(&mut findings, "Copyright Alice", TextLocation::new("a.c", 5, 5));
        insert_copyright(&mut findings, "Copyright Bob", TextLocation::new("a.c", 2, 2));

        assert_eq!(findings.len(), 2);
        let alice = findings.iter().find(|f| f.statement == "Copyright Alice").unwrap();
        assert_eq!(alice.locations.len(), 2);
    }

    #[test]
    fn insert_copyright_keeps_locations_sorted_and_deduplicated() {
        let mut findings = Vec::new();
        insert_copyright(&mut findings, "X", TextLocation::new("a.c", 5, 5));
        insert_copyright(&mut findings, "X", TextLocation::new("a.c", 1, 1));
        insert_copyright(&mut findings, "X", TextLocation::new("a.c", 1, 1));

        let entry = &findings[0];
        assert_eq!(
            entry.locations,
            vec![TextLocation::new("a.c", 1, 1), TextLocation::new("a.c", 5, 5)]
        );
    }

    #[test]
    fn build_license_findings_unions_key_sets_and_sorts() {
        let mut locs = std::collections::BTreeMap::new();
        locs.insert("MIT".to_string(), vec![TextLocation::new("a.c", 1, 1)]);

        let mut copyrights = std::collections::BTreeMap::new();
        copyrights.insert(
            "BSD-3-Clause".to_string(),
            vec![CopyrightFindings {
                statement: "Copyright X".to_string(),
                locations: vec![TextLocation::new("b.c", 3, 3)],
            }],
        );

        let findings = build_license_findings(locs, copyrights);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].license, "BSD-3-Clause");
        assert!(findings[0].locations.is_empty());
        assert_eq!(findings[1].license, "MIT");
        assert!(findings[1].copyrights.is_empty());
    }
}
