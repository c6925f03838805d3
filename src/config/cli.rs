use crate::domain::ports::Storage;
use crate::utils::error::{HookError, Result};
use std::path::Path;
use tokio::fs;
use tokio::io::{self, AsyncWriteExt};

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        tracing::debug!("Ensuring directory: {}", path.display());
        fs::create_dir_all(path)
            .await
            .map_err(|e| HookError::io(path, e))
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> Result<u64> {
        let mut source = fs::File::open(from)
            .await
            .map_err(|e| HookError::io(from, e))?;

        // Bytes only; an existing destination keeps its own mode
        let mut target = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(to)
            .await
            .map_err(|e| HookError::io(to, e))?;

        let copied = io::copy(&mut source, &mut target)
            .await
            .map_err(|e| HookError::io(to, e))?;
        target.flush().await.map_err(|e| HookError::io(to, e))?;

        Ok(copied)
    }
}
