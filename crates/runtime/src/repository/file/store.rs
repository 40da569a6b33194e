//! File-based RecordStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RecordStore, RepositoryError, Result};

/// File-based implementation of RecordStore.
///
/// Each key is one file inside `base_dir`, named after the key. Writes go to a
/// temporary sibling first and are renamed into place, so a crash mid-write
/// leaves the previous value intact.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path backing a key.
    fn value_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(key))
    }
}

impl RecordStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        tracing::debug!("Loaded {} from {}", key, path.display());

        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        let temp_path = self.base_dir.join(format!(".{key}.tmp"));

        fs::write(&temp_path, value).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} to {}", key, path.display());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Removed {}", key);
        }

        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.value_path(key).map(|p| p.exists()).unwrap_or(false)
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)? {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if path.is_file()
                && let Some(name) = path.file_name().and_then(|s| s.to_str())
                && !name.starts_with('.')
            {
                keys.push(name.to_string());
            }
        }

        keys.sort_unstable();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();

        assert_eq!(store.get("characters.json").unwrap(), None);
        store.set("characters.json", "[1]").unwrap();
        store.set("characters.json", "[2]").unwrap();

        assert_eq!(store.get("characters.json").unwrap().as_deref(), Some("[2]"));
        assert!(temp_dir.path().join("characters.json").exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let store = FileStore::new(temp_dir.path()).unwrap();
            store.set("CoC7e_UserSpells", "[]").unwrap();
        }

        let store = FileStore::new(temp_dir.path()).unwrap();
        assert_eq!(store.get("CoC7e_UserSpells").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.keys().unwrap(), vec!["CoC7e_UserSpells".to_string()]);
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();

        store.set("npcs.json", "[]").unwrap();
        store.remove("npcs.json").unwrap();
        assert!(!store.contains("npcs.json"));
        store.remove("npcs.json").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();

        assert!(matches!(
            store.set("../escape", "[]"),
            Err(RepositoryError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(RepositoryError::InvalidKey(_))));
    }
}
