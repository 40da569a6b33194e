//! Read-only snapshot of a session for rendering.

use super::session::{CombatSession, CombatantId, SessionPhase, SessionStatus};
use crate::state::FighterType;

/// One fighter row of a [`SessionView`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterView {
    pub id: CombatantId,
    pub name: String,
    pub fighter_type: FighterType,
    pub hit_points: u32,
    pub sanity: u32,
    pub magic_points: u32,
    pub dexterity: u32,
    /// It is this fighter's turn.
    pub active: bool,
    /// This fighter can be picked as the pending attack's target.
    pub targetable: bool,
}

/// Everything the presentation layer needs to draw a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionView {
    pub name: String,
    pub round: u32,
    pub turn: usize,
    pub phase: SessionPhase,
    pub status: SessionStatus,
    pub fighters: Vec<FighterView>,
}

impl CombatSession {
    pub fn view(&self) -> SessionView {
        let targets = self.targets();
        let fighters = self
            .combatants
            .iter()
            .enumerate()
            .map(|(index, combatant)| {
                let attributes = &combatant.fighter.attributes;
                FighterView {
                    id: combatant.id,
                    name: combatant.fighter.name.clone(),
                    fighter_type: combatant.fighter.fighter_type(),
                    hit_points: attributes.hit_points,
                    sanity: attributes.sanity,
                    magic_points: attributes.magic_points,
                    dexterity: attributes.dexterity,
                    active: index == self.turn,
                    targetable: targets.contains(&combatant.id),
                }
            })
            .collect();

        SessionView {
            name: self.name.clone(),
            round: self.round,
            turn: self.turn,
            phase: self.phase(),
            status: self.status(),
            fighters,
        }
    }
}
