//! Record store contract.

use super::error::Result;

/// Opaque key-value blob storage.
///
/// Every repository serializes its whole collection to one string value under
/// a fixed key. Stores know nothing about the content.
pub trait RecordStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Check if a key exists
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }

    /// List all stored keys
    fn keys(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
