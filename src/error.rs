use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a report run. All three failures are
/// non-transient (bad path, bad syntax, permissions), so nothing retries.
#[derive(Debug, Error)]
pub enum TfdocError {
    #[error("failed to read state file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode state file: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
