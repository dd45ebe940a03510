use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write store '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode store contents: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons a persisted checkpoint record is rejected on load.
#[derive(Debug, Error)]
pub enum CheckpointDecodeError {
    #[error("Checkpoint record is not valid JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
    #[error("Checkpoint record is not an array.")]
    NotAnArray,
    #[error("Checkpoint record entry {index} is not a number.")]
    NotANumber { index: usize },
}
