//! High score persistence
//!
//! The engine keeps a single best distance. Stores load it once at startup
//! and save it whenever it increases: LocalStorage on the web, a JSON file
//! natively, memory for tests and headless runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::PersistError;

/// Where the best distance lives between sessions
pub trait HighScoreStore: Send {
    fn load(&mut self) -> Result<u32, PersistError>;
    fn save(&mut self, value: u32) -> Result<(), PersistError>;
}

/// On-disk record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// Volatile store, counts how often it was written
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: u32,
    saves: Arc<AtomicU32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value,
            saves: Arc::default(),
        }
    }

    /// Shared save counter, readable after the store is moved into an engine
    pub fn save_count_handle(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.saves)
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32, PersistError> {
        Ok(self.value)
    }

    fn save(&mut self, value: u32) -> Result<(), PersistError> {
        self.value = value;
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// JSON file store (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<u32, PersistError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };
        let record: HighScoreRecord = serde_json::from_str(&json)?;
        Ok(record.high_score)
    }

    fn save(&mut self, value: u32) -> Result<(), PersistError> {
        let json = serde_json::to_string(&HighScoreRecord { high_score: value })?;
        // Temp file first, then rename over the old save
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        log::info!("High score {} saved to {}", value, self.path.display());
        Ok(())
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "RocketHighScore";

    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&mut self) -> Result<u32, PersistError> {
        let storage = Self::storage()?;
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => {
                let record: HighScoreRecord = serde_json::from_str(&json)?;
                log::info!("Loaded high score {}", record.high_score);
                Ok(record.high_score)
            }
            _ => {
                log::info!("No high score found, starting fresh");
                Ok(0)
            }
        }
    }

    fn save(&mut self, value: u32) -> Result<(), PersistError> {
        let storage = Self::storage()?;
        let json = serde_json::to_string(&HighScoreRecord { high_score: value })?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| PersistError::StorageUnavailable)?;
        log::info!("High score saved ({})", value);
        Ok(())
    }
}
