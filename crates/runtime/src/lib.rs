//! Persistence and session ownership for the keeper tool.
//!
//! This crate wires the pure domain of `keeper-core` to storage. Consumers
//! build a [`Keeper`] over any [`RecordStore`] and drive every repository and
//! the single live combat through it.
//!
//! Modules are organized by responsibility:
//! - [`repository`] holds the record store contract, its backends and the
//!   typed collections persisted on top of it
//! - [`keeper`] hosts the controller owning repositories and the session
pub mod error;
pub mod keeper;
pub mod repository;

pub use error::{KeeperError, Result};
pub use keeper::{EndCombat, FighterSelection, Keeper};
pub use repository::{
    ArmedWeapon, Confirmation, Deletion, FileStore, INVESTIGATORS_KEY, InMemoryStore,
    InvestigatorRepository, NPCS_KEY, NpcRepository, ROSTERS_KEY, RecordStore, RepositoryError,
    RosterRepository, SPELLS_KEY, SpellRepository, Upsert, WEAPONS_KEY, WeaponRepository,
};
