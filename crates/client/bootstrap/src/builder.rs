//! Builds the record store and keeper used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use keeper_runtime::{FileStore, InMemoryStore, Keeper, RecordStore};

use crate::config::{KeeperConfig, StorageBackend};

/// Builder that assembles the configured store and a [`Keeper`] over it.
pub struct KeeperBuilder {
    config: KeeperConfig,
    store: Option<Arc<dyn RecordStore>>,
}

impl KeeperBuilder {
    pub fn new(config: KeeperConfig) -> Self {
        Self {
            config,
            store: None,
        }
    }

    /// Load `.env` if present, then read configuration from the environment.
    pub fn from_env() -> Self {
        // Missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::new(KeeperConfig::from_env())
    }

    pub fn config(&self) -> &KeeperConfig {
        &self.config
    }

    /// Use a caller-provided store instead of the configured backend.
    pub fn store(mut self, store: impl RecordStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn build(self) -> Result<KeeperSetup> {
        let store = match self.store {
            Some(store) => store,
            None => open_store(&self.config)?,
        };

        let keeper = Keeper::new(store);

        Ok(KeeperSetup {
            config: self.config,
            keeper,
        })
    }
}

fn open_store(config: &KeeperConfig) -> Result<Arc<dyn RecordStore>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage; nothing will be saved");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::File => {
            let store = FileStore::new(&config.data_dir).with_context(|| {
                format!("opening data directory {}", config.data_dir.display())
            })?;
            tracing::info!("Using data directory {}", config.data_dir.display());
            Ok(Arc::new(store))
        }
    }
}

pub struct KeeperSetup {
    pub config: KeeperConfig,
    pub keeper: Keeper,
}
