//! JSON persistence for the notification collection and settings.
//!
//! One state file holds the full collection plus the settings block.
//! Loading a missing or corrupt file yields defaults instead of failing;
//! saves go through a temp-file rename so a partially written document is
//! never visible to the next load.

use crate::config::Settings;
use crate::error::{NudgeError, Result};
use crate::notification::NotificationRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk document: the full record collection plus the settings block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreData {
    /// All notification records, in insertion order.
    pub notifications: Vec<NotificationRecord>,
    /// User settings.
    pub settings: Settings,
}

/// Durable store mapping one state file to [`StoreData`].
///
/// The store is the single mutation point for the collection: the engine
/// returns a diff and [`apply_tick`](Self::apply_tick) applies it here.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    data: StoreData,
}

impl Store {
    /// Open the store at `path`, loading any existing state.
    ///
    /// A missing or unparsable state file yields an empty collection with
    /// default settings.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = load_data(&path);
        Self { path, data }
    }

    /// Open the store at the default platform location.
    pub fn open_default() -> Self {
        Self::open(default_state_path())
    }

    /// Path of the backing state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current notification records.
    pub fn notifications(&self) -> &[NotificationRecord] {
        &self.data.notifications
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    /// Append a record and persist.
    pub fn add_notification(&mut self, record: NotificationRecord) -> Result<()> {
        self.data.notifications.push(record);
        self.save()
    }

    /// Replace the record at `index` and persist. Returns `false` when the
    /// index is out of bounds.
    pub fn update_notification(&mut self, index: usize, record: NotificationRecord) -> Result<bool> {
        let Some(slot) = self.data.notifications.get_mut(index) else {
            return Ok(false);
        };
        *slot = record;
        self.save()?;
        Ok(true)
    }

    /// Remove the record at `index` and persist. Returns `false` when the
    /// index is out of bounds.
    pub fn remove_notification(&mut self, index: usize) -> Result<bool> {
        if index >= self.data.notifications.len() {
            return Ok(false);
        }
        self.data.notifications.remove(index);
        self.save()?;
        Ok(true)
    }

    /// Apply an engine diff, then persist.
    ///
    /// Updates are applied in memory first; when the save fails the
    /// in-memory state stays authoritative and the error is returned so the
    /// host can retry on the next tick.
    pub fn apply_tick(&mut self, updates: &[(usize, NotificationRecord)]) -> Result<()> {
        for (index, record) in updates {
            if let Some(slot) = self.data.notifications.get_mut(*index) {
                *slot = record.clone();
            } else {
                warn!("tick update for out-of-bounds index {index} dropped");
            }
        }
        self.save()
    }

    /// Replace the settings block and persist.
    pub fn set_settings(&mut self, settings: Settings) -> Result<()> {
        self.data.settings = settings;
        self.save()
    }

    /// Persist the current state.
    ///
    /// Writes to a `.tmp` sibling and renames into place so the next load
    /// never observes a partial document.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| NudgeError::Store(format!("cannot create state dir: {e}")))?;
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| NudgeError::Store(format!("cannot serialize state: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| NudgeError::Store(format!("cannot write state: {e}")))?;
        std::fs::rename(&tmp, &self.path)
            .map_err(|e| NudgeError::Store(format!("cannot commit state: {e}")))?;

        debug!("state saved to {}", self.path.display());
        Ok(())
    }
}

fn load_data(path: &Path) -> StoreData {
    let bytes = match std::fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no state file at {}, starting empty", path.display());
            return StoreData::default();
        }
        Err(e) => {
            warn!("cannot read state file {}: {e}", path.display());
            return StoreData::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(data) => data,
        Err(e) => {
            warn!("corrupt state file {}, starting empty: {e}", path.display());
            StoreData::default()
        }
    }
}

/// Default path for the state file.
pub fn default_state_path() -> PathBuf {
    crate::app_dirs::config_dir().join("state.json")
}
