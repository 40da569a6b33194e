//! Domain model and rules for the investigator/NPC manager.
//!
//! `keeper-core` defines the fighter records, the spell and weapon catalogs,
//! derived statistics and the combat turn tracker. Everything here is pure:
//! persistence and the single live session are owned by `keeper-runtime`.
pub mod catalog;
pub mod combat;
pub mod error;
pub mod state;
pub mod stats;
pub mod validate;

pub use catalog::{Cost, Spell, Weapon};
pub use combat::{
    AttackReport, CombatError, CombatRoster, CombatSession, Combatant, CombatantId, FighterView,
    SessionPhase, SessionStatus, SessionView, TurnAdvance,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Attributes, Fighter, FighterKind, FighterType, InvestigatorForm, NpcForm, NpcTraits,
};
pub use stats::StrengthBracket;
pub use validate::{ValidationError, clamp_number, parse_damage};
