//! Flat-file JSON store
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Schema validation on load, `ensure_exists` for first start
//! - 1.0.0: Initial load/save of the whole document

use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{PersistedState, StoreError};

/// Whole-document store backed by a single JSON file.
///
/// Every call touches the disk. There is no lock around read-modify-write
/// cycles, so two concurrent writers race and the last save wins.
#[derive(Debug, Clone)]
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, or the default state when the file does not exist
    pub async fn load(&self) -> Result<PersistedState, StoreError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No data file at {}, using defaults", self.path.display());
                return Ok(PersistedState::default());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let state: PersistedState = serde_json::from_str(&contents)?;
        state.validate()?;
        Ok(state)
    }

    /// Overwrite the file with the full document
    pub async fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json).await?;
        debug!(
            "Saved {} reminders to {}",
            state.reminders.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Write the default document if the file is missing
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        self.save(&PersistedState::default()).await?;
        info!("📄 Created data file at {}", self.path.display());
        Ok(())
    }
}
