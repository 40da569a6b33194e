//! Persistent record types.
//!
//! Fighters live in the investigator and NPC repositories; the combat layer
//! only ever works on clones of them.

mod fighter;
mod forms;

pub use fighter::{Attributes, Fighter, FighterKind, FighterType, NpcTraits};
pub use forms::{InvestigatorForm, NpcForm};
