use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to read result file {path:?}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed scan result JSON: {0}")]
    MalformedResult(#[from] serde_json::Error),

    #[error("scan result is missing a file count (neither headers[].extra_data.files_count nor files_count is present)")]
    MissingFileCount,
}
