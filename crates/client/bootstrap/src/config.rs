//! Keeper configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the record store keeps its blobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// Nothing survives the process.
    Memory,
    /// One file per collection under [`KeeperConfig::data_dir`].
    #[default]
    File,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "fs" => Ok(Self::File),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

/// Configuration required to assemble a [`keeper_runtime::Keeper`].
#[derive(Clone, Debug)]
pub struct KeeperConfig {
    pub storage: StorageBackend,
    pub data_dir: PathBuf,
    /// Enables a file log sink when set.
    pub log_dir: Option<PathBuf>,
    pub log_ansi: bool,
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            data_dir: default_data_dir(),
            log_dir: None,
            log_ansi: true,
        }
    }
}

impl KeeperConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `KEEPER_STORAGE` - `memory` or `file` (default: file)
    /// - `KEEPER_DATA_DIR` - Directory for saved collections (default: platform-specific)
    /// - `KEEPER_LOG_DIR` - Directory for a log file (default: stderr only)
    /// - `KEEPER_LOG_ANSI` - Colour stderr output (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`KeeperConfig::from_env`], reading values through `lookup`.
    ///
    /// Unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(storage) = read_var::<StorageBackend>(&lookup, "KEEPER_STORAGE") {
            config.storage = storage;
        }

        if let Some(dir) = lookup("KEEPER_DATA_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        config.log_dir = lookup("KEEPER_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        if let Some(ansi) = read_var::<bool>(&lookup, "KEEPER_LOG_ANSI") {
            config.log_ansi = ansi;
        }

        config
    }
}

/// Platform data directory, or `./save_data` when none is known.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "keeper")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("save_data"))
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> KeeperConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        KeeperConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config(&[]);
        assert_eq!(config.storage, StorageBackend::File);
        assert_eq!(config.data_dir, default_data_dir());
        assert!(config.log_dir.is_none());
        assert!(config.log_ansi);
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("KEEPER_STORAGE", "Memory"),
            ("KEEPER_DATA_DIR", "/tmp/keeper"),
            ("KEEPER_LOG_DIR", "/tmp/keeper/logs"),
            ("KEEPER_LOG_ANSI", "false"),
        ]);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/keeper"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/keeper/logs")));
        assert!(!config.log_ansi);
    }

    #[test]
    fn garbage_keeps_defaults() {
        let config = config(&[("KEEPER_STORAGE", "cloud"), ("KEEPER_LOG_ANSI", "maybe")]);
        assert_eq!(config.storage, StorageBackend::File);
        assert!(config.log_ansi);
    }
}
