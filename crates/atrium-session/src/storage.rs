//! Session storage backends.

use crate::error::SessionError;
use async_trait::async_trait;
use atrium_core::config::{SessionBackend, SessionConfig};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// Trait for session storage backends.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove `key`. Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Create a storage backend based on configuration.
pub fn create_storage(config: &SessionConfig) -> Result<Box<dyn SessionStorage>, SessionError> {
    match config.backend {
        SessionBackend::Memory => Ok(Box::new(MemoryStorage::new())),
        SessionBackend::File => Ok(Box::new(FileStorage::new(&config.file_path))),
        SessionBackend::Null => Ok(Box::new(NullStorage)),
    }
}

/// In-process storage. The session lives exactly as long as the server.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| SessionError::Storage(format!("failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| SessionError::Storage(format!("failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| SessionError::Storage(format!("failed to acquire write lock: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

/// File storage: one JSON object persisted to a single file.
///
/// Every operation does a read-modify-write of the whole file. There is one
/// writer at a time in this demo, so no file locking is attempted.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `path`. The file is created on first
    /// write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<HashMap<String, String>, SessionError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        // A corrupt file reads as an empty store, not a hard failure.
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "session file is malformed; treating as empty");
                Ok(HashMap::new())
            }
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[async_trait]
impl SessionStorage for FileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.remove(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// Storage for environments with no storage facility at all.
///
/// Reads always report absence and writes are accepted and dropped, so a
/// store backed by this never considers anyone logged in.
pub struct NullStorage;

#[async_trait]
impl SessionStorage for NullStorage {
    async fn read(&self, _key: &str) -> Result<Option<String>, SessionError> {
        Ok(None)
    }

    async fn write(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Ok(())
    }

    async fn remove(&self, _key: &str) -> Result<(), SessionError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();

        assert!(storage.read("auth_token").await.unwrap().is_none());

        storage.write("auth_token", "tok").await.unwrap();
        assert_eq!(
            storage.read("auth_token").await.unwrap().as_deref(),
            Some("tok")
        );

        storage.remove("auth_token").await.unwrap();
        assert!(storage.read("auth_token").await.unwrap().is_none());

        // Removing an absent key is a no-op.
        storage.remove("auth_token").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileStorage::new(&path);
        storage.write("auth_token", "tok").await.unwrap();
        storage.write("user_data", "{}").await.unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.read("auth_token").await.unwrap().as_deref(),
            Some("tok")
        );

        reopened.remove("auth_token").await.unwrap();
        assert!(reopened.read("auth_token").await.unwrap().is_none());
        assert_eq!(
            reopened.read("user_data").await.unwrap().as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn test_file_storage_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/session.json");

        let storage = FileStorage::new(&path);
        storage.write("auth_token", "tok").await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_file_storage_corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let storage = FileStorage::new(&path);
        assert!(storage.read("auth_token").await.unwrap().is_none());

        // Writing through the corrupt file replaces it with a valid one.
        storage.write("auth_token", "tok").await.unwrap();
        assert_eq!(
            storage.read("auth_token").await.unwrap().as_deref(),
            Some("tok")
        );
    }

    #[tokio::test]
    async fn test_null_storage_never_stores() {
        let storage = NullStorage;

        storage.write("auth_token", "tok").await.unwrap();
        assert!(storage.read("auth_token").await.unwrap().is_none());
        storage.remove("auth_token").await.unwrap();
    }

    #[tokio::test]
    async fn test_create_storage_honors_backend_choice() {
        let config = SessionConfig {
            backend: SessionBackend::Null,
            ..Default::default()
        };
        let storage = create_storage(&config).unwrap();

        storage.write("auth_token", "tok").await.unwrap();
        assert!(storage.read("auth_token").await.unwrap().is_none());
    }
}
