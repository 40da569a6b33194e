//! Live combat session state machine.
//!
//! ```text
//!  start(roster) ──▶ InProgress ──begin_attack──▶ SelectingTarget
//!                      ▲   │                          │
//!                      │   └─end_turn─┐   cancel ─────┤
//!                      │              ▼               │ resolve_attack
//!                      └──────── (next turn) ◀────────┘
//! ```
//!
//! The session owns independent copies of the roster's fighters. Each copy
//! receives a [`CombatantId`] at start; actions address fighters by that
//! handle, and positions are re-derived from the current list on every call.

use std::cmp::Reverse;
use std::fmt;

use super::damage::apply_damage;
use super::errors::CombatError;
use super::roster::CombatRoster;
use crate::state::Fighter;

/// Stable handle of a fighter within one session. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fighter copy taking part in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub id: CombatantId,
    pub fighter: Fighter,
}

/// Sub-state of an active session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    /// Waiting for the current fighter to attack or end the turn.
    InProgress,
    /// An attack is pending and needs a target.
    SelectingTarget,
}

/// Whether the fight still has opposing fighters.
///
/// The attacker is never among its own targets, so a started session always
/// keeps at least one fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    /// Two or more fighters remain.
    Ongoing,
    /// Exactly one fighter remains.
    Decided { survivor: CombatantId },
}

/// Attack awaiting a target choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingAttack {
    pub(crate) attacker: CombatantId,
    pub(crate) targets: Vec<CombatantId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    InProgress,
    SelectingTarget(PendingAttack),
}

impl Phase {
    fn tag(&self) -> SessionPhase {
        match self {
            Phase::InProgress => SessionPhase::InProgress,
            Phase::SelectingTarget(_) => SessionPhase::SelectingTarget,
        }
    }
}

/// Outcome of a resolved attack, including the automatic turn advance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: CombatantId,
    pub target: CombatantId,
    pub target_name: String,
    pub damage: u32,
    /// Hit points after the hit; negative on overkill.
    pub remaining_hp: i64,
    /// The target dropped to 0 or fewer hit points and left the fight.
    pub defeated: bool,
    pub advance: super::TurnAdvance,
}

/// The single live combat encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatSession {
    pub(crate) name: String,
    pub(crate) combatants: Vec<Combatant>,
    pub(crate) turn: usize,
    pub(crate) round: u32,
    pub(crate) phase: Phase,
}

impl CombatSession {
    /// Starts a session from a roster.
    ///
    /// Fighters are deep-copied, then ordered by descending dexterity. Equal
    /// dexterity keeps roster order.
    pub fn start(roster: &CombatRoster) -> Result<Self, CombatError> {
        if roster.fighters.is_empty() {
            return Err(CombatError::EmptyRoster);
        }

        let mut fighters: Vec<Fighter> = roster.fighters.clone();
        // `sort_by_key` is stable.
        fighters.sort_by_key(|fighter| Reverse(fighter.dexterity()));

        let combatants = fighters
            .into_iter()
            .zip(0u32..)
            .map(|(fighter, id)| Combatant {
                id: CombatantId(id),
                fighter,
            })
            .collect();

        Ok(Self {
            name: roster.name.clone(),
            combatants,
            turn: 0,
            round: 1,
            phase: Phase::InProgress,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Index of the fighter whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.tag()
    }

    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// The fighter whose turn it is, if anyone is left.
    pub fn current(&self) -> Option<&Combatant> {
        self.combatants.get(self.turn)
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    /// Current position of a fighter, derived from the live list.
    pub fn position_of(&self, id: CombatantId) -> Option<usize> {
        self.combatants.iter().position(|c| c.id == id)
    }

    /// Handle of the fighter currently at `index`.
    pub fn id_at(&self, index: usize) -> Option<CombatantId> {
        self.combatants.get(index).map(|c| c.id)
    }

    /// Targets offered by the pending attack, empty when none is pending.
    pub fn targets(&self) -> &[CombatantId] {
        match &self.phase {
            Phase::SelectingTarget(pending) => &pending.targets,
            Phase::InProgress => &[],
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self.combatants.as_slice() {
            [survivor] => SessionStatus::Decided {
                survivor: survivor.id,
            },
            _ => SessionStatus::Ongoing,
        }
    }

    /// True once fewer than two fighters remain.
    pub fn is_decided(&self) -> bool {
        !matches!(self.status(), SessionStatus::Ongoing)
    }

    /// The current fighter declares an attack.
    ///
    /// Every other fighter becomes a selectable target. Returns the target
    /// handles in turn order.
    pub fn begin_attack(&mut self) -> Result<Vec<CombatantId>, CombatError> {
        self.expect_phase(SessionPhase::InProgress)?;

        let attacker = self.current().map(|c| c.id).ok_or(CombatError::NoTargets)?;
        let targets: Vec<CombatantId> = self
            .combatants
            .iter()
            .map(|c| c.id)
            .filter(|&id| id != attacker)
            .collect();

        if targets.is_empty() {
            return Err(CombatError::NoTargets);
        }

        self.phase = Phase::SelectingTarget(PendingAttack {
            attacker,
            targets: targets.clone(),
        });
        Ok(targets)
    }

    /// Abandons the pending attack without side effects.
    pub fn cancel_attack(&mut self) -> Result<(), CombatError> {
        self.expect_phase(SessionPhase::SelectingTarget)?;
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Applies `damage` to the chosen target, removes it on defeat, then
    /// advances to the next turn.
    ///
    /// An invalid target leaves the session waiting for another choice.
    pub fn resolve_attack(
        &mut self,
        target: CombatantId,
        damage: u32,
    ) -> Result<AttackReport, CombatError> {
        let attacker = match &self.phase {
            Phase::SelectingTarget(pending) if pending.targets.contains(&target) => {
                pending.attacker
            }
            Phase::SelectingTarget(_) => return Err(CombatError::InvalidTarget { target }),
            Phase::InProgress => {
                return Err(CombatError::wrong_phase(
                    SessionPhase::SelectingTarget,
                    SessionPhase::InProgress,
                ));
            }
        };
        let position = self
            .position_of(target)
            .ok_or(CombatError::InvalidTarget { target })?;

        let combatant = &mut self.combatants[position];
        let outcome = apply_damage(combatant.fighter.hit_points(), damage);
        combatant.fighter.attributes.hit_points = outcome.stored();
        let target_name = combatant.fighter.name.clone();

        let defeated = outcome.is_defeat();
        if defeated {
            self.combatants.remove(position);
            // Keep pointing at the same fighter after the shift.
            if position < self.turn {
                self.turn -= 1;
            }
        }

        self.phase = Phase::InProgress;
        let advance = self.advance_turn();

        Ok(AttackReport {
            attacker,
            target,
            target_name,
            damage,
            remaining_hp: outcome.remaining,
            defeated,
            advance,
        })
    }

    /// Resolves against whichever fighter sits at `index` right now.
    pub fn resolve_attack_at(
        &mut self,
        index: usize,
        damage: u32,
    ) -> Result<AttackReport, CombatError> {
        let target = self.id_at(index).ok_or(CombatError::InvalidTargetIndex {
            index,
            len: self.combatants.len(),
        })?;
        self.resolve_attack(target, damage)
    }

    pub(crate) fn expect_phase(&self, expected: SessionPhase) -> Result<(), CombatError> {
        let actual = self.phase();
        if actual != expected {
            return Err(CombatError::wrong_phase(expected, actual));
        }
        Ok(())
    }
}
