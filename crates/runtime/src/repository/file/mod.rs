//! File-based record store.

mod store;

pub use store::FileStore;
