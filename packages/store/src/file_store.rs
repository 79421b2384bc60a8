//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] that keeps one small file per key
//! under a base directory. Desktop builds use it to keep the session tokens
//! and theme across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── accessToken
//! ├── refreshToken
//! └── theme
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/flux/` |
//! | Linux | `~/.local/share/flux/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\flux\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::storage::{KeyValueStore, StorageError};

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.key_path(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.key_path(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ACCESS_TOKEN_KEY;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("flux_store_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        store.set(ACCESS_TOKEN_KEY, "token-123").unwrap();

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(
            reopened.get(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            Some("token-123")
        );

        reopened.remove(ACCESS_TOKEN_KEY).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        // Removing twice is fine
        reopened.remove(ACCESS_TOKEN_KEY).unwrap();

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileStore::new(std::env::temp_dir());
        assert!(matches!(
            store.get("../etc/passwd"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.set("", "x"), Err(StorageError::InvalidKey(_))));
    }
}
