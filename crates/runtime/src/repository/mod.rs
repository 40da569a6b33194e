//! Persistence layer.
//!
//! A [`RecordStore`] is an opaque key-value blob store. Each typed repository
//! keeps its whole collection in memory, loads it once from a fixed key and
//! writes it back after every successful mutation.
//!
//! - [`InvestigatorRepository`] and [`NpcRepository`]: fighter records
//! - [`SpellRepository`] and [`WeaponRepository`]: user catalogs
//! - [`RosterRepository`]: saved combat rosters

mod collection;
mod confirm;
mod error;
mod file;
mod investigator;
mod memory;
mod npc;
mod roster;
mod spell;
mod traits;
mod weapon;

pub use collection::{load_collection, save_collection};
pub use confirm::{Confirmation, Deletion};
pub use error::{RepositoryError, Result};
pub use file::FileStore;
pub use investigator::{INVESTIGATORS_KEY, InvestigatorRepository};
pub use memory::InMemoryStore;
pub use npc::{ArmedWeapon, NPCS_KEY, NpcRepository};
pub use roster::{ROSTERS_KEY, RosterRepository};
pub use spell::{SPELLS_KEY, SpellRepository, Upsert};
pub use traits::RecordStore;
pub use weapon::{WEAPONS_KEY, WeaponRepository};
