//! Shared bootstrap utilities for keeper front-ends.
//!
//! Provides configuration loading, logging setup, and keeper assembly that
//! can be reused by any front-end crate.
pub mod builder;
pub mod config;
pub mod logging;

pub use builder::{KeeperBuilder, KeeperSetup};
pub use config::{KeeperConfig, StorageBackend};
