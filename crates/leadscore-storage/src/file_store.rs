//! File-backed artifact store
//!
//! Each slot is a pretty-printed JSON file `<data_dir>/<slot>.json`.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::{StoreError, StoreResult},
    slot::Slot,
    store::ArtifactStore,
};

#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir`; the directory is created on first write
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, slot: Slot) -> PathBuf {
        self.data_dir.join(slot.file_name())
    }
}

#[async_trait]
impl ArtifactStore for FileStore {
    async fn get_raw(&self, slot: Slot) -> StoreResult<Value> {
        let path = self.path_for(slot);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound { slot });
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn put_raw(&self, slot: Slot, value: Value) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let path = self.path_for(slot);
        let content = serde_json::to_string_pretty(&value)?;

        // Write to temp file first, then rename over the slot file
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, &content).await?;
        tokio::fs::rename(&temp_path, &path).await?;

        debug!("Wrote slot '{}' to {}", slot, path.display());
        Ok(())
    }
}
