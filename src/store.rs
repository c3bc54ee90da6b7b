//! Persistent key-value store for HealthMate
//!
//! Thin adapter over an embedded sled database. Every value is a
//! whole-document JSON blob stored under a fixed string key; there are no
//! partial updates. Writes are flushed before returning so callers can treat
//! a successful return as a durable commit.

use crate::error::{HealthMateError, Result};
use anyhow::Context;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

/// Key for the persisted chat session collection
pub const CHAT_SESSIONS_KEY: &str = "chat_sessions";

/// Key for the cached symptom vocabulary
pub const SYMPTOM_VOCAB_KEY: &str = "symptom_vocab_cache_v1";

/// Embedded key-value store backed by sled
///
/// Keys are logical document names; values are JSON-encoded documents
/// replaced wholesale on every write.
pub struct KvStore {
    db: sled::Db,
}

impl KvStore {
    /// Open the store in the user's data directory
    ///
    /// The location can be overridden with the `HEALTHMATE_STORE` environment
    /// variable, which makes it easy to point the binary at a test store
    /// without changing the user's application data dir.
    pub fn open() -> Result<Self> {
        if let Ok(override_path) = std::env::var("HEALTHMATE_STORE") {
            return Self::open_at(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "healthmate", "healthmate")
            .ok_or_else(|| HealthMateError::Storage("Could not determine data directory".into()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .context("Failed to create data directory")
            .map_err(|e| HealthMateError::Storage(e.to_string()))?;

        Self::open_at(data_dir.join("store"))
    }

    /// Open the store at the specified path
    ///
    /// This is primarily useful for tests where the default application data
    /// directory is not desirable (for example, using a temporary directory).
    pub fn open_at<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for store")
                .map_err(|e| HealthMateError::Storage(e.to_string()))?;
        }

        let db = sled::open(&path)
            .map_err(|e| HealthMateError::Storage(format!("Failed to open store: {}", e)))?;

        Ok(Self { db })
    }

    /// Read and decode the document under `key`
    ///
    /// Returns `Ok(None)` when the key is absent. A value that fails to
    /// decode is also treated as absent rather than an error, so a corrupt
    /// blob degrades to empty state instead of breaking the caller.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let bytes = self
            .db
            .get(key)
            .map_err(|e| HealthMateError::Storage(format!("Failed to read '{}': {}", key, e)))?;

        match bytes {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    tracing::warn!("Discarding undecodable value under '{}': {}", key, e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Serialize `value` and replace the document under `key`
    ///
    /// The write is flushed to disk before this returns.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value).map_err(HealthMateError::from)?;

        self.db
            .insert(key, bytes)
            .map_err(|e| HealthMateError::Storage(format!("Failed to write '{}': {}", key, e)))?;
        self.db
            .flush()
            .map_err(|e| HealthMateError::Storage(format!("Failed to flush '{}': {}", key, e)))?;

        Ok(())
    }

    /// Remove the document under `key`
    ///
    /// Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.db
            .remove(key)
            .map_err(|e| HealthMateError::Storage(format!("Failed to remove '{}': {}", key, e)))?;
        self.db
            .flush()
            .map_err(|e| HealthMateError::Storage(format!("Failed to flush '{}': {}", key, e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::tempdir;

    /// Helper: create a temporary store backed by a temp directory.
    ///
    /// Returns both the `KvStore` and the `TempDir` so the caller keeps
    /// ownership of the directory (preventing it from being removed).
    fn create_test_store() -> (KvStore, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create tempdir");
        let store = KvStore::open_at(dir.path().join("store")).expect("failed to open store");
        (store, dir)
    }

    #[test]
    fn test_read_missing_key_returns_none() {
        let (store, _dir) = create_test_store();
        let value: Option<Vec<String>> = store.read("missing").expect("read failed");
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (store, _dir) = create_test_store();
        let symptoms = vec!["fever".to_string(), "headache".to_string()];

        store.write(SYMPTOM_VOCAB_KEY, &symptoms).expect("write failed");

        let loaded: Option<Vec<String>> = store.read(SYMPTOM_VOCAB_KEY).expect("read failed");
        assert_eq!(loaded, Some(symptoms));
    }

    #[test]
    fn test_write_replaces_whole_document() {
        let (store, _dir) = create_test_store();
        store
            .write("doc", &vec!["a".to_string(), "b".to_string()])
            .expect("first write failed");
        store
            .write("doc", &vec!["c".to_string()])
            .expect("second write failed");

        let loaded: Option<Vec<String>> = store.read("doc").expect("read failed");
        assert_eq!(loaded, Some(vec!["c".to_string()]));
    }

    #[test]
    fn test_remove_deletes_value() {
        let (store, _dir) = create_test_store();
        store.write("doc", &vec![1, 2, 3]).expect("write failed");
        store.remove("doc").expect("remove failed");

        let loaded: Option<Vec<i32>> = store.read("doc").expect("read failed");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (store, _dir) = create_test_store();
        store.remove("never-written").expect("first remove failed");
        store.remove("never-written").expect("second remove failed");
    }

    #[test]
    fn test_undecodable_value_treated_as_absent() {
        let (store, _dir) = create_test_store();
        // Write a string, read it back as a list: decode fails, treated as absent.
        store
            .write("doc", &"not a list".to_string())
            .expect("write failed");

        let loaded: Option<Vec<String>> = store.read("doc").expect("read failed");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_unserializable_value_is_a_serialization_error() {
        let (store, _dir) = create_test_store();

        // JSON object keys must be strings; a byte-vector key cannot encode.
        let mut bad: std::collections::HashMap<Vec<u8>, u32> = std::collections::HashMap::new();
        bad.insert(vec![1, 2], 3);

        let err = store.write("doc", &bad).unwrap_err();
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    #[serial]
    fn test_open_respects_env_override() {
        // Use nested path to ensure parent directory creation is exercised.
        let dir = tempdir().expect("failed to create tempdir");
        let store_path = dir.path().join("nested").join("store");
        env::set_var("HEALTHMATE_STORE", store_path.to_string_lossy().to_string());

        let store = KvStore::open().expect("open failed with env override");
        store.write("probe", &1u32).expect("write failed");
        assert!(store_path.parent().unwrap().exists());

        env::remove_var("HEALTHMATE_STORE");
    }
}
