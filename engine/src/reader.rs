//! §4.A Result Reader — load the raw ScanCode JSON artifact, tolerating its absence.

use std::path::Path;

use crate::error::EngineError;
use crate::raw::RawTree;

/// Load the result file at `path`, returning both the typed view used for extraction and the
/// verbatim parsed JSON value for archival (§6: "the original raw tree, passed through for
/// archival"). The typed view only models the fields this engine consumes; the `Value` retains
/// every field the external tool emitted, including ones `RawTree` drops.
///
/// Returns the empty sentinel (typed view) paired with `Value::Null` when the path doesn't exist,
/// isn't a regular file, or is empty — never a parse attempt against nothing. Any JSON parse
/// failure is fatal; the engine never partially consumes a malformed tree.
pub fn read_result(path: &Path) -> Result<(RawTree, serde_json::Value), EngineError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => {
            tracing::debug!("result file {:?} does not exist, treating as empty", path);
            return Ok((RawTree::empty(), serde_json::Value::Null));
        }
    };

    if !metadata.is_file() || metadata.len() == 0 {
        tracing::debug!(
            "result file {:?} is not a regular non-empty file, treating as empty",
            path
        );
        return Ok((RawTree::empty(), serde_json::Value::Null));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    tracing::info!("parsing scan result file {:?} ({} bytes)", path, contents.len());

    let raw: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
        tracing::error!("failed to parse scan result {:?}: {}", path, e);
        EngineError::MalformedResult(e)
    })?;

    let tree: RawTree = serde_json::from_value(raw.clone()).map_err(|e| {
        tracing::error!("failed to parse scan result {:?}: {}", path, e);
        EngineError::MalformedResult(e)
    })?;

    Ok((tree, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempPath(std::path::PathBuf);

    impl TempPath {
        fn new(contents: &[u8]) -> Self {
            let n = COUNTER.fetch_add(1, Ordering::Relaxed);
            let path = std::env::temp_dir().join(format!(
                "scancode-engine-test-{}-{}.json",
                std::process::id(),
                n
            ));
            std::fs::write(&path, contents).unwrap();
            Self(path)
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn missing_path_yields_empty_sentinel() {
        let (tree, raw) = read_result(Path::new("/nonexistent/path/result.json")).unwrap();
        assert!(tree.files.is_empty());
        assert!(tree.headers.is_empty());
        assert_eq!(tree.files_count, None);
        assert!(raw.is_null());
    }

    #[test]
    fn empty_file_yields_empty_sentinel() {
        let temp = TempPath::new(b"");
        let (tree, raw) = read_result(&temp.0).unwrap();
        assert!(tree.files.is_empty());
        assert!(raw.is_null());
    }

    #[test]
    fn malformed_json_is_fatal() {
        let temp = TempPath::new(b"not json");
        let result = read_result(&temp.0);
        assert!(matches!(result, Err(EngineError::MalformedResult(_))));
    }

    #[test]
    fn well_formed_json_parses() {
        let temp = TempPath::new(br#"{"files_count": 3, "files": []}"#);
        let (tree, raw) = read_result(&temp.0).unwrap();
        assert_eq!(tree.files_count, Some(3));
        assert_eq!(raw["files_count"], 3);
    }

    #[test]
    fn raw_value_retains_fields_the_typed_view_drops() {
        let temp = TempPath::new(
            br#"{"files_count": 1, "files": [], "scancode_version": "32.0.0", "headers": []}"#,
        );
        let (_, raw) = read_result(&temp.0).unwrap();
        assert_eq!(raw["scancode_version"], "32.0.0");
    }
}
