//! # Durable client storage
//!
//! The session and the theme preference survive a reload by writing a few
//! string values under fixed keys. [`KeyValueStore`] is the seam: the same
//! session logic runs against browser `localStorage` on the web, a directory
//! of small files on native targets, and an in-memory map in tests.
//!
//! All operations are synchronous so callers can write through in the same
//! step as their in-memory update.

use thiserror::Error;

use crate::models::Theme;

/// Key of the persisted bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Key of the persisted refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Key of the persisted colour scheme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// String key/value storage that outlives the process.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read the persisted theme, falling back to the default on a missing or
/// unreadable value.
pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => Theme::parse(&value).unwrap_or_default(),
        Ok(None) => Theme::default(),
        Err(e) => {
            tracing::warn!("Failed to read theme preference: {}", e);
            Theme::default()
        }
    }
}

pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_theme_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);

        save_theme(&store, Theme::Dark).unwrap();
        assert_eq!(load_theme(&store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_garbage_theme_falls_back() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store), Theme::Light);
    }
}
