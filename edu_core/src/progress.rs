//! # Progress Store
//!
//! Per-module completion percentage (0-100), kept behind an explicit store
//! interface instead of ambient global state. The UI layer owns a store and
//! injects it where needed; the geometry and quiz code never touches one.
//!
//! Two implementations:
//!
//! - [`MemoryProgressStore`] - throwaway sessions and tests
//! - [`JsonProgressStore`] - a JSON file keyed by module storage key, the
//!   durable equivalent of the browser build's `moduleProgress` entry.
//!   Saves are atomic (write to `.tmp`, rename) so an interrupted write
//!   never corrupts existing progress.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{EduError, EduResult};
use crate::modules::ModuleId;

/// Interface the UI layer uses to read and persist module completion.
///
/// `get` returns 0 for a module with no stored progress. `set` clamps to
/// 100 and persists immediately.
pub trait ProgressStore {
    fn get(&self, module: ModuleId) -> u8;
    fn set(&mut self, module: ModuleId, percent: u8) -> EduResult<()>;
}

/// In-memory store. Progress vanishes when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryProgressStore {
    records: HashMap<ModuleId, u8>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn get(&self, module: ModuleId) -> u8 {
        self.records.get(&module).copied().unwrap_or(0)
    }

    fn set(&mut self, module: ModuleId, percent: u8) -> EduResult<()> {
        self.records.insert(module, percent.min(100));
        Ok(())
    }
}

/// One persisted progress entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub percent: u8,
    pub updated_at: DateTime<Utc>,
}

/// File-backed store, one JSON object keyed by module storage key.
///
/// ## File format
///
/// ```json
/// {
///   "math": { "percent": 50, "updated_at": "2026-08-29T14:03:21Z" },
///   "science": { "percent": 100, "updated_at": "2026-08-27T09:11:02Z" }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonProgressStore {
    path: PathBuf,
    records: HashMap<String, ProgressRecord>,
}

impl JsonProgressStore {
    /// Open a store at `path`, loading existing records. A missing file is
    /// an empty store, not an error; it is created on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> EduResult<Self> {
        let path = path.into();
        let records = if path.exists() {
            let json = fs::read_to_string(&path).map_err(|e| {
                EduError::storage_error("read", path.display().to_string(), e.to_string())
            })?;
            serde_json::from_str(&json).map_err(|e| EduError::SerializationError {
                reason: e.to_string(),
            })?
        } else {
            HashMap::new()
        };
        Ok(JsonProgressStore { path, records })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full record for a module, including its last-update timestamp.
    pub fn record(&self, module: ModuleId) -> Option<&ProgressRecord> {
        self.records.get(module.storage_key())
    }

    /// Write the whole store atomically: serialize to a sibling `.tmp`
    /// file, sync, then rename over the target.
    fn save(&self) -> EduResult<()> {
        let json =
            serde_json::to_string_pretty(&self.records).map_err(|e| EduError::SerializationError {
                reason: e.to_string(),
            })?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp_file = File::create(&tmp_path).map_err(|e| {
            EduError::storage_error("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;
        tmp_file.write_all(json.as_bytes()).map_err(|e| {
            EduError::storage_error("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;
        tmp_file.sync_all().map_err(|e| {
            EduError::storage_error("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            EduError::storage_error("rename", self.path.display().to_string(), e.to_string())
        })
    }
}

impl ProgressStore for JsonProgressStore {
    fn get(&self, module: ModuleId) -> u8 {
        self.records
            .get(module.storage_key())
            .map(|r| r.percent)
            .unwrap_or(0)
    }

    fn set(&mut self, module: ModuleId, percent: u8) -> EduResult<()> {
        self.records.insert(
            module.storage_key().to_string(),
            ProgressRecord {
                percent: percent.min(100),
                updated_at: Utc::now(),
            },
        );
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_defaults_to_zero() {
        let store = MemoryProgressStore::new();
        for id in ModuleId::ALL {
            assert_eq!(store.get(id), 0);
        }
    }

    #[test]
    fn test_memory_store_set_get_and_clamp() {
        let mut store = MemoryProgressStore::new();
        store.set(ModuleId::Math, 50).unwrap();
        assert_eq!(store.get(ModuleId::Math), 50);
        assert_eq!(store.get(ModuleId::Science), 0);

        store.set(ModuleId::Math, 250).unwrap();
        assert_eq!(store.get(ModuleId::Math), 100);
    }

    #[test]
    fn test_json_store_roundtrip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        {
            let mut store = JsonProgressStore::open(&path).unwrap();
            assert_eq!(store.get(ModuleId::Math), 0);
            store.set(ModuleId::Math, 50).unwrap();
            store.set(ModuleId::Social, 100).unwrap();
        }

        let store = JsonProgressStore::open(&path).unwrap();
        assert_eq!(store.get(ModuleId::Math), 50);
        assert_eq!(store.get(ModuleId::Social), 100);
        assert_eq!(store.get(ModuleId::Science), 0);
        assert!(store.record(ModuleId::Math).is_some());
        assert!(store.record(ModuleId::Science).is_none());
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProgressStore::open(dir.path().join("none.json")).unwrap();
        assert_eq!(store.get(ModuleId::Math), 0);
    }

    #[test]
    fn test_json_store_overwrite_updates_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = JsonProgressStore::open(&path).unwrap();
        store.set(ModuleId::Math, 50).unwrap();
        let first = store.record(ModuleId::Math).unwrap().clone();
        store.set(ModuleId::Math, 100).unwrap();
        let second = store.record(ModuleId::Math).unwrap();

        assert_eq!(second.percent, 100);
        assert!(second.updated_at >= first.updated_at);
    }

    #[test]
    fn test_json_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "not json at all").unwrap();

        let err = JsonProgressStore::open(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = JsonProgressStore::open(&path).unwrap();
        store.set(ModuleId::Math, 50).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
