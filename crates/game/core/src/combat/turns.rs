//! Turn and round progression.

use super::errors::CombatError;
use super::session::{CombatSession, SessionPhase};

/// Where the turn pointer landed after an advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAdvance {
    pub turn: usize,
    pub round: u32,
    /// The pointer wrapped past the last fighter and a new round began.
    pub new_round: bool,
}

/// Turn progression methods for CombatSession.
impl CombatSession {
    /// Ends the current fighter's turn without acting.
    pub fn end_turn(&mut self) -> Result<TurnAdvance, CombatError> {
        self.expect_phase(SessionPhase::InProgress)?;
        Ok(self.advance_turn())
    }

    /// Moves the turn pointer to the next fighter, wrapping into a new round.
    ///
    /// With nobody left there is no valid turn: the pointer stays at 0 and
    /// the round does not change.
    pub(crate) fn advance_turn(&mut self) -> TurnAdvance {
        if self.combatants.is_empty() {
            self.turn = 0;
            return TurnAdvance {
                turn: 0,
                round: self.round,
                new_round: false,
            };
        }

        self.turn += 1;
        let new_round = self.turn >= self.combatants.len();
        if new_round {
            self.turn = 0;
            self.round += 1;
        }

        TurnAdvance {
            turn: self.turn,
            round: self.round,
            new_round,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::combat::{CombatRoster, CombatSession};
    use crate::state::{Attributes, Fighter};

    fn session_of(count: u32) -> CombatSession {
        let fighters = (0..count)
            .map(|i| {
                Fighter::investigator(
                    format!("F{i}"),
                    Attributes {
                        dexterity: 100 - i,
                        hit_points: 5,
                        ..Attributes::default()
                    },
                )
            })
            .collect();
        CombatSession::start(&CombatRoster::new("Cycle", fighters).unwrap()).unwrap()
    }

    #[test]
    fn full_cycle_returns_to_first_fighter_next_round() {
        let mut session = session_of(3);

        let first = session.end_turn().unwrap();
        assert_eq!((first.turn, first.round, first.new_round), (1, 1, false));
        session.end_turn().unwrap();
        let wrap = session.end_turn().unwrap();

        assert_eq!((wrap.turn, wrap.round, wrap.new_round), (0, 2, true));
    }

    #[test]
    fn single_fighter_starts_a_round_every_turn() {
        let mut session = session_of(1);
        session.end_turn().unwrap();
        session.end_turn().unwrap();
        assert_eq!(session.turn(), 0);
        assert_eq!(session.round(), 3);
    }

    #[test]
    fn empty_session_advance_is_a_no_op() {
        let mut session = session_of(2);
        session.combatants.clear();

        let advance = session.end_turn().unwrap();
        assert_eq!((advance.turn, advance.round, advance.new_round), (0, 1, false));
        assert!(session.current().is_none());
    }
}
