//! Snapshot persistence.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::RepositoryError;
use crate::snapshot::RateSnapshot;

/// Stores the last good rate snapshot across restarts.
#[async_trait]
pub trait RateSnapshotRepository: Send + Sync {
    /// Returns the stored snapshot, or `None` if nothing was saved yet.
    async fn load(&self) -> Result<Option<RateSnapshot>, RepositoryError>;

    /// Replaces the stored snapshot.
    async fn save(&self, snapshot: &RateSnapshot) -> Result<(), RepositoryError>;
}

/// Keeps the snapshot in process memory only.
#[derive(Debug, Default)]
pub struct InMemoryRateRepository {
    slot: RwLock<Option<RateSnapshot>>,
}

impl InMemoryRateRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateSnapshotRepository for InMemoryRateRepository {
    async fn load(&self) -> Result<Option<RateSnapshot>, RepositoryError> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, snapshot: &RateSnapshot) -> Result<(), RepositoryError> {
        *self.slot.write().await = Some(snapshot.clone());
        Ok(())
    }
}

/// Keeps the snapshot in a JSON file.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileRateRepository {
    path: PathBuf,
}

impl JsonFileRateRepository {
    /// Creates a repository backed by `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl RateSnapshotRepository for JsonFileRateRepository {
    async fn load(&self) -> Result<Option<RateSnapshot>, RepositoryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn save(&self, snapshot: &RateSnapshot) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, bytes).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}
