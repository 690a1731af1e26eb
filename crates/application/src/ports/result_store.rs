//! Result persistence port

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pin_probe_domain::ResultLog;

/// Errors that can occur while persisting results.
#[derive(Debug, thiserror::Error)]
pub enum ResultStoreError {
    /// The results file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The results could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Port for writing the result log somewhere durable.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Writes every result in `log` to `path`, replacing existing content.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    async fn save(&self, path: &Path, log: &ResultLog) -> Result<(), ResultStoreError>;
}
