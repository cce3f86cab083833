//! File-backed storage backend.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{KeyValue, StorageError};

/// A key-value store backed by a single JSON file.
///
/// The whole map is loaded once at open and rewritten on every mutation.
/// A missing file starts empty; a malformed or unreadable one is logged and
/// also treated as empty, so hand-edited or damaged data can never take the
/// application down.
///
/// Concurrent `FileStore` handles over the same path do not coordinate:
/// the last writer wins over the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading any existing map.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "storage file is malformed, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "storage file is unreadable, starting empty"
                );
                HashMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rewrite the backing file from the current map.
    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock();
        entries.insert(key.to_owned(), value.to_owned());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.lock();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("marquee_store_{}_{name}.json", std::process::id()))
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");

        {
            let store = FileStore::open(&path);
            store.set("k", "v").unwrap();
        }

        let store = FileStore::open(&path);
        assert_eq!(store.get("k").unwrap(), Some("v".to_owned()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let store = FileStore::open(&path);
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let path = temp_path("malformed");
        fs::write(&path, "{not json at all").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("anything").unwrap(), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_remove_rewrites_file() {
        let path = temp_path("remove");

        let store = FileStore::open(&path);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("a").unwrap(), None);
        assert_eq!(reopened.get("b").unwrap(), Some("2".to_owned()));

        let _ = fs::remove_file(&path);
    }
}
