//! Save slots for the player's position and rotation.
//!
//! A [`SaveRecord`] is written to a named slot through the [`SaveStore`]
//! trait. Two stores are provided:
//!
//! - [`FileSaveStore`] – one JSON file per slot (`<dir>/<slot>.sav`),
//!   overwritten on every save
//! - [`MemorySaveStore`] – in-process map, used by tests and dry runs
//!
//! The [`SaveSlots`] resource bundles the active store with the slot name the
//! save/load observers use.

use std::fs;
use std::path::PathBuf;

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::mapposition::Vec3;
use crate::components::rotation::Rotation;

pub const DEFAULT_SAVE_SLOT: &str = "SlotGame";
pub const SAVE_FILE_EXTENSION: &str = "sav";

/// Persisted player transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub position: Vec3,
    pub rotation: Rotation,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save slot '{0}' not found")]
    NotFound(String),
    #[error("invalid save slot name '{0}'")]
    InvalidSlot(String),
    #[error("save io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("save format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Key-value storage of save records by slot name.
pub trait SaveStore {
    /// Write `record` to `slot`, replacing any previous record.
    fn save(&mut self, slot: &str, record: &SaveRecord) -> Result<(), SaveError>;
    /// Read the record in `slot`; [`SaveError::NotFound`] when empty.
    fn load(&self, slot: &str) -> Result<SaveRecord, SaveError>;
}

/// Slot names are restricted so they are always safe file names.
pub fn validate_slot(slot: &str) -> Result<(), SaveError> {
    let ok = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(SaveError::InvalidSlot(slot.to_string()))
    }
}

/// Stores each slot as a pretty-printed JSON file in `dir`.
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    dir: PathBuf,
}

impl FileSaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSaveStore { dir: dir.into() }
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", slot, SAVE_FILE_EXTENSION))
    }
}

impl SaveStore for FileSaveStore {
    fn save(&mut self, slot: &str, record: &SaveRecord) -> Result<(), SaveError> {
        validate_slot(slot)?;
        fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(slot);
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)?;
        debug!("Wrote save slot '{}' to {:?}", slot, path);
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<SaveRecord, SaveError> {
        validate_slot(slot)?;
        let path = self.slot_path(slot);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SaveError::NotFound(slot.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySaveStore {
    slots: FxHashMap<String, SaveRecord>,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemorySaveStore {
    fn save(&mut self, slot: &str, record: &SaveRecord) -> Result<(), SaveError> {
        validate_slot(slot)?;
        self.slots.insert(slot.to_string(), *record);
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<SaveRecord, SaveError> {
        validate_slot(slot)?;
        self.slots
            .get(slot)
            .copied()
            .ok_or_else(|| SaveError::NotFound(slot.to_string()))
    }
}

/// Active save store plus the slot name used by the save/load observers.
#[derive(Resource)]
pub struct SaveSlots {
    pub store: Box<dyn SaveStore + Send + Sync>,
    pub slot: String,
}

impl SaveSlots {
    pub fn new(store: impl SaveStore + Send + Sync + 'static, slot: impl Into<String>) -> Self {
        SaveSlots {
            store: Box::new(store),
            slot: slot.into(),
        }
    }

    /// In-memory slots under [`DEFAULT_SAVE_SLOT`].
    pub fn in_memory() -> Self {
        Self::new(MemorySaveStore::new(), DEFAULT_SAVE_SLOT)
    }

    pub fn save(&mut self, record: &SaveRecord) -> Result<(), SaveError> {
        self.store.save(&self.slot, record)
    }

    pub fn load(&self) -> Result<SaveRecord, SaveError> {
        self.store.load(&self.slot)
    }
}
