//! JSON file result store.

use std::path::Path;

use async_trait::async_trait;
use pin_probe_application::ports::{ResultStore, ResultStoreError};
use pin_probe_domain::ResultLog;
use tokio::fs;

use crate::serialization::to_json_stable;

/// Writes the result log as a pretty-printed JSON array.
///
/// Existing files are overwritten. Missing parent directories are not
/// created; a bad path is reported as a write error.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResultStore;

impl JsonResultStore {
    /// Creates a new store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultStore for JsonResultStore {
    async fn save(&self, path: &Path, log: &ResultLog) -> Result<(), ResultStoreError> {
        let json = to_json_stable(log).map_err(|e| ResultStoreError::Serialization(e.to_string()))?;
        fs::write(path, json)
            .await
            .map_err(|source| ResultStoreError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
