//! §4.E Per-File Associator and §4.F Corpus Associator.

use std::collections::BTreeMap;

use crate::model::{self, insert_copyright, CopyrightFinding, CopyrightFindings, LicenseFinding, LicenseFindings};
use crate::rootlicense::select_root_license;

/// Bind the copyrights of a single file to its licenses, per the §4.E cardinality rules.
///
/// `licenses` and `copyrights` must all share one `location.path` — callers only ever invoke this
/// per path-group, so this is checked with a `debug_assert!` rather than a runtime error.
pub fn associate_file(
    licenses: &[LicenseFinding],
    copyrights: &[CopyrightFinding],
    root_license: &str,
    tolerance: u32,
) -> BTreeMap<String, Vec<CopyrightFindings>> {
    debug_assert!(all_same_path(licenses, copyrights));

    let mut result: BTreeMap<String, Vec<CopyrightFindings>> = BTreeMap::new();

    match licenses.len() {
        0 => {
            if !copyrights.is_empty() && !root_license.is_empty() {
                let entry = result.entry(root_license.to_string()).or_default();
                for c in copyrights {
                    insert_copyright(entry, &c.statement, c.location.clone());
                }
            }
        }
        1 => {
            let entry = result.entry(licenses[0].license.clone()).or_default();
            for c in copyrights {
                insert_copyright(entry, &c.statement, c.location.clone());
            }
        }
        _ => {
            for license in licenses {
                let closest = copyrights.iter().filter(|c| {
                    line_distance(c.location.start_line, license.location.start_line) <= tolerance
                });
                let entry = result.entry(license.license.clone()).or_default();
                for c in closest {
                    insert_copyright(entry, &c.statement, c.location.clone());
                }
            }
        }
    }

    result
}

fn line_distance(a: u32, b: u32) -> u32 {
    a.max(b) - a.min(b)
}

fn all_same_path(licenses: &[LicenseFinding], copyrights: &[CopyrightFinding]) -> bool {
    let mut paths = licenses
        .iter()
        .map(|l| l.location.path.as_str())
        .chain(copyrights.iter().map(|c| c.location.path.as_str()));
    match paths.next() {
        Some(first) => paths.all(|p| p == first),
        None => true,
    }
}

/// §4.F: fold every file's §4.E association into the corpus-wide license→{locations, copyrights}
/// map, and derive the corpus root license over the full (not per-file) set of license findings.
pub fn associate_corpus(
    all_licenses: &[LicenseFinding],
    all_copyrights: &[CopyrightFinding],
    root_license_globs: &[String],
    tolerance: u32,
) -> Vec<LicenseFindings> {
    let root_license = select_root_license(all_licenses, root_license_globs);

    let licenses_by_path = group_by_path(all_licenses, |l| &l.location.path);
    let copyrights_by_path = group_by_path(all_copyrights, |c| &c.location.path);

    let mut paths: Vec<&str> = licenses_by_path
        .keys()
        .chain(copyrights_by_path.keys())
        .copied()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    paths.sort_unstable();

    let empty_licenses: Vec<LicenseFinding> = Vec::new();
    let empty_copyrights: Vec<CopyrightFinding> = Vec::new();
    let mut copyrights_for_license: BTreeMap<String, Vec<CopyrightFindings>> = BTreeMap::new();
    for path in paths {
        let licenses = licenses_by_path.get(path).unwrap_or(&empty_licenses);
        let copyrights = copyrights_by_path.get(path).unwrap_or(&empty_copyrights);

        let per_file = associate_file(licenses, copyrights, &root_license, tolerance);
        for (license, findings) in per_file {
            let entry = copyrights_for_license.entry(license).or_default();
            for finding in findings {
                for location in finding.locations {
                    insert_copyright(entry, &finding.statement, location);
                }
            }
        }
    }

    let mut locations_for_license: BTreeMap<String, Vec<crate::model::TextLocation>> =
        BTreeMap::new();
    for finding in all_licenses {
        let entry = locations_for_license
            .entry(finding.license.clone())
            .or_default();
        if let Err(idx) = entry.binary_search(&finding.location) {
            entry.insert(idx, finding.location.clone());
        }
    }

    model::build_license_findings(locations_for_license, copyrights_for_license)
}

fn group_by_path<'a, T>(
    items: &'a [T],
    path_of: impl Fn(&'a T) -> &'a String,
) -> BTreeMap<&'a str, Vec<T>>
where
    T: Clone,
{
    let mut grouped: BTreeMap<&'a str, Vec<T>> = BTreeMap::new();
    for item in items {
        grouped
            .entry(path_of(item).as_str())
            .or_default()
            .push(item.clone());
    }
    grouped
}
