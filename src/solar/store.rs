//! Persistence for the last known solar snapshot
//!
//! The store holds exactly one record. Failures never propagate past the
//! trait boundary: a missing or malformed record reads as `None`, and a
//! failed write reports `false`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::models::SolarSnapshot;
use crate::models::solar::MAX_KINDEX;
use crate::{HfPropError, Result};

/// Single-record snapshot storage
pub trait SnapshotStore {
    fn load(&self) -> Option<SolarSnapshot>;
    fn save(&self, snapshot: &SolarSnapshot) -> bool;
}

/// Snapshot stored as a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<SolarSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let snapshot: SolarSnapshot = serde_json::from_str(&contents).map_err(|e| {
            HfPropError::cache(format!(
                "Malformed snapshot in {}: {e}",
                self.path.display()
            ))
        })?;

        if snapshot.kindex > MAX_KINDEX {
            return Err(HfPropError::cache(format!(
                "Snapshot in {} has K-index {} outside 0-{MAX_KINDEX}",
                self.path.display(),
                snapshot.kindex
            )));
        }
        Ok(Some(snapshot))
    }

    fn write(&self, snapshot: &SolarSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| HfPropError::cache(format!("Failed to encode snapshot: {e}")))?;

        // Replace the whole record at once so readers never see half a file
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl SnapshotStore for JsonFileStore {
    #[tracing::instrument(name = "load_snapshot", level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Option<SolarSnapshot> {
        match self.read() {
            Ok(Some(snapshot)) => {
                debug!("Snapshot found, source {}", snapshot.source);
                Some(snapshot)
            }
            Ok(None) => {
                debug!("No snapshot on disk");
                None
            }
            Err(e) => {
                warn!("Ignoring unreadable snapshot: {}", e);
                None
            }
        }
    }

    #[tracing::instrument(name = "save_snapshot", level = "debug", skip(self, snapshot), fields(path = %self.path.display()))]
    fn save(&self, snapshot: &SolarSnapshot) -> bool {
        match self.write(snapshot) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not persist solar snapshot: {}", e);
                false
            }
        }
    }
}

/// In-process store, used for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<SolarSnapshot>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_snapshot(snapshot: SolarSnapshot) -> Self {
        Self {
            slot: Mutex::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<SolarSnapshot> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, snapshot: &SolarSnapshot) -> bool {
        match self.slot.lock() {
            Ok(mut slot) => {
                *slot = Some(snapshot.clone());
                true
            }
            Err(_) => false,
        }
    }
}
