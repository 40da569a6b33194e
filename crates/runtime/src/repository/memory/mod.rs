//! In-memory record store for testing and development.

mod store;

pub use store::InMemoryStore;
