//! §4.D Root-License Selector, isolated behind a single function per the spec's design note so a
//! future promotion from "single license" to "set of licenses" doesn't ripple through call sites.

use glob::{MatchOptions, Pattern};

use crate::model::LicenseFinding;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Return the license string of the unique `LicenseFinding` whose location path matches one of
/// `globs` at the top level. Zero or multiple matches both yield the empty string. Glob-pattern
/// compile errors are swallowed as a non-match for that pattern, logged at `warn!`.
///
/// Matching is against the full path, not its basename: a vendored dependency's nested
/// `vendor/thing/LICENSE.txt` must not be able to stand in for the corpus's own root license.
pub fn select_root_license(findings: &[LicenseFinding], globs: &[String]) -> String {
    let patterns: Vec<Pattern> = globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!("invalid root-license glob {:?}: {}", glob, e);
                None
            }
        })
        .collect();

    let matches: Vec<&LicenseFinding> = findings
        .iter()
        .filter(|finding| is_root_license_path(&finding.location.path, &patterns))
        .collect();

    match matches.as_slice() {
        [only] => only.license.clone(),
        _ => String::new(),
    }
}

fn is_root_license_path(path: &str, patterns: &[Pattern]) -> bool {
    patterns
        .iter()
        .any(|pattern| pattern.matches_with(path, MATCH_OPTIONS))
}
