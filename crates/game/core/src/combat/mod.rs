//! Combat tracking.
//!
//! - [`CombatRoster`]: saved, reusable fighter lists
//! - [`CombatSession`]: the live turn tracker (ordering, rounds, targeting,
//!   damage and removal)
//! - [`SessionView`]: render-ready snapshot of a session
//!
//! Damage values are entered by the user; nothing here rolls dice.

pub mod damage;
mod errors;
mod roster;
mod session;
mod turns;
mod view;

pub use damage::{DamageOutcome, apply_damage};
pub use errors::CombatError;
pub use roster::CombatRoster;
pub use session::{
    AttackReport, CombatSession, Combatant, CombatantId, SessionPhase, SessionStatus,
};
pub use turns::TurnAdvance;
pub use view::{FighterView, SessionView};
