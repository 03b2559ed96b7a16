//! File-based MatchStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use strike_core::MatchState;

use crate::repository::{MatchStore, Result, StoreError};

/// Key the browser build stored its document under. Kept as the file stem so
/// the on-disk name stays recognizable across builds.
pub const STORAGE_KEY: &str = "smash-stage-ban-app";

/// File-based implementation of MatchStore.
///
/// Stores the current match as a single pretty-printed JSON document at
/// `<dir>/smash-stage-ban-app.json`. Saves go through a temp file plus an
/// atomic rename, so a crash mid-write never leaves a truncated document.
pub struct FileMatchStore {
    path: PathBuf,
}

impl FileMatchStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        })
    }

    /// Create a store in the per-user data directory for this platform.
    pub fn in_user_data_dir() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "stagestrike")
            .ok_or(StoreError::NoDataDir)?;
        Self::new(dirs.data_dir())
    }

    /// Path of the document this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MatchStore for FileMatchStore {
    fn save(&self, state: &MatchState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;

        // Write to temp file, then atomic rename
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved match state to {}", self.path.display());

        Ok(())
    }

    fn load_raw(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let document = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded match state from {}", self.path.display());

        Ok(Some(document))
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!("Deleted match state at {}", self.path.display());
        }

        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
