//! The keeper controller.
//!
//! [`Keeper`] owns the record store, every repository and at most one live
//! [`CombatSession`]. It is the only place that crosses repository
//! boundaries: rosters copy fighters out of the investigator and NPC lists,
//! and spell/weapon assignment checks the catalogs.

use std::sync::Arc;

use keeper_core::{
    AttackReport, CombatError, CombatSession, CombatantId, Fighter, GameError, SessionStatus,
    SessionView, TurnAdvance, parse_damage,
};

use crate::error::{KeeperError, Result};
use crate::repository::{
    ArmedWeapon, Confirmation, InvestigatorRepository, NpcRepository, RecordStore, RosterRepository,
    SpellRepository, WeaponRepository,
};

/// A fighter picked for a new roster, by position in its sorted list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FighterSelection {
    Investigator(usize),
    Npc(usize),
}

/// Subject of a pending "end combat" confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndCombat {
    pub session: String,
    /// Which start of the combat the proposal was made against.
    pub generation: u64,
}

pub struct Keeper {
    store: Arc<dyn RecordStore>,
    investigators: InvestigatorRepository,
    npcs: NpcRepository,
    spells: SpellRepository,
    weapons: WeaponRepository,
    rosters: RosterRepository,
    session: Option<CombatSession>,
    /// Bumped by every `start_combat`.
    generation: u64,
}

impl Keeper {
    /// Loads every repository from `store`. Unreadable collections start empty.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let keeper = Self {
            investigators: InvestigatorRepository::load(store.clone()),
            npcs: NpcRepository::load(store.clone()),
            spells: SpellRepository::load(store.clone()),
            weapons: WeaponRepository::load(store.clone()),
            rosters: RosterRepository::load(store.clone()),
            store,
            session: None,
            generation: 0,
        };
        tracing::info!(
            investigators = keeper.investigators.list().len(),
            npcs = keeper.npcs.list().len(),
            spells = keeper.spells.list().len(),
            weapons = keeper.weapons.list().len(),
            rosters = keeper.rosters.list().len(),
            "all data loaded"
        );
        keeper
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    pub fn investigators(&self) -> &InvestigatorRepository {
        &self.investigators
    }

    pub fn investigators_mut(&mut self) -> &mut InvestigatorRepository {
        &mut self.investigators
    }

    pub fn npcs(&self) -> &NpcRepository {
        &self.npcs
    }

    pub fn npcs_mut(&mut self) -> &mut NpcRepository {
        &mut self.npcs
    }

    pub fn spells(&self) -> &SpellRepository {
        &self.spells
    }

    pub fn spells_mut(&mut self) -> &mut SpellRepository {
        &mut self.spells
    }

    pub fn weapons(&self) -> &WeaponRepository {
        &self.weapons
    }

    pub fn weapons_mut(&mut self) -> &mut WeaponRepository {
        &mut self.weapons
    }

    pub fn rosters(&self) -> &RosterRepository {
        &self.rosters
    }

    pub fn rosters_mut(&mut self) -> &mut RosterRepository {
        &mut self.rosters
    }

    // ------------------------------------------------------------------
    // Catalog assignment
    // ------------------------------------------------------------------

    pub fn teach_investigator(&mut self, index: usize, spell: &str) -> Result<()> {
        self.investigators.learn_spell(index, spell, &self.spells)
    }

    pub fn teach_npc(&mut self, index: usize, spell: &str) -> Result<()> {
        self.npcs.learn_spell(index, spell, &self.spells)
    }

    pub fn arm_npc(&mut self, index: usize, weapon: &str) -> Result<()> {
        self.npcs.arm(index, weapon, &self.weapons)
    }

    pub fn npc_arsenal(&self, index: usize) -> Result<Vec<ArmedWeapon>> {
        self.npcs.arsenal(index, &self.weapons)
    }

    // ------------------------------------------------------------------
    // Rosters
    // ------------------------------------------------------------------

    /// Saves a roster holding copies of the selected fighters.
    ///
    /// Later edits to those investigators or NPCs do not reach the roster.
    pub fn create_roster(&mut self, name: &str, selection: &[FighterSelection]) -> Result<usize> {
        let fighters = selection
            .iter()
            .map(|pick| self.selected_fighter(*pick).cloned())
            .collect::<Result<Vec<Fighter>>>()?;
        self.rosters.create(name, fighters)
    }

    fn selected_fighter(&self, pick: FighterSelection) -> Result<&Fighter> {
        match pick {
            FighterSelection::Investigator(index) => self.investigators.get(index),
            FighterSelection::Npc(index) => self.npcs.get(index),
        }
    }

    // ------------------------------------------------------------------
    // Combat session
    // ------------------------------------------------------------------

    /// Starts a session from a saved roster, replacing any running one.
    pub fn start_combat(&mut self, roster_index: usize) -> Result<&CombatSession> {
        let roster = self.rosters.get(roster_index)?;
        let session = CombatSession::start(roster)?;

        if let Some(previous) = &self.session {
            tracing::warn!(previous = %previous.name(), "discarding running combat");
        }
        tracing::info!(
            combat = %session.name(),
            fighters = session.len(),
            "combat started"
        );

        self.generation += 1;
        Ok(&*self.session.insert(session))
    }

    pub fn session(&self) -> Option<&CombatSession> {
        self.session.as_ref()
    }

    pub fn session_view(&self) -> Option<SessionView> {
        self.session.as_ref().map(CombatSession::view)
    }

    /// Lists the fighters the current fighter may target.
    pub fn begin_attack(&mut self) -> Result<Vec<CombatantId>> {
        let result = self.session_mut().and_then(|session| Ok(session.begin_attack()?));
        rejected("begin_attack", result)
    }

    /// Applies a typed damage amount to `target`.
    ///
    /// Blank or invalid input cancels the attack and yields `Ok(None)`.
    pub fn resolve_attack(
        &mut self,
        target: CombatantId,
        raw_damage: &str,
    ) -> Result<Option<AttackReport>> {
        self.resolve_with(raw_damage, |session, damage| {
            session.resolve_attack(target, damage)
        })
    }

    /// Like [`Keeper::resolve_attack`], addressing the target by its current position.
    pub fn resolve_attack_at(
        &mut self,
        index: usize,
        raw_damage: &str,
    ) -> Result<Option<AttackReport>> {
        self.resolve_with(raw_damage, |session, damage| {
            session.resolve_attack_at(index, damage)
        })
    }

    fn resolve_with<F>(&mut self, raw_damage: &str, resolve: F) -> Result<Option<AttackReport>>
    where
        F: FnOnce(&mut CombatSession, u32) -> std::result::Result<AttackReport, CombatError>,
    {
        let session = self.session_mut()?;

        let Some(damage) = parse_damage(raw_damage) else {
            rejected("cancel_attack", session.cancel_attack().map_err(KeeperError::from))?;
            tracing::info!(input = raw_damage, "attack cancelled");
            return Ok(None);
        };

        let report = rejected("resolve_attack", resolve(session, damage).map_err(KeeperError::from))?;
        tracing::info!(
            attacker = %report.attacker,
            target = %report.target_name,
            damage,
            remaining_hp = report.remaining_hp,
            "attack resolved"
        );
        if report.defeated {
            tracing::info!(target = %report.target_name, "fighter defeated");
        }
        if report.advance.new_round {
            tracing::info!(round = report.advance.round, "new round");
        }
        match session.status() {
            SessionStatus::Ongoing => {}
            status => tracing::info!(?status, "combat decided"),
        }

        Ok(Some(report))
    }

    pub fn cancel_attack(&mut self) -> Result<()> {
        let result = self.session_mut().and_then(|session| Ok(session.cancel_attack()?));
        rejected("cancel_attack", result)
    }

    pub fn end_turn(&mut self) -> Result<TurnAdvance> {
        let result = self.session_mut().and_then(|session| Ok(session.end_turn()?));
        let advance = rejected("end_turn", result)?;
        if advance.new_round {
            tracing::info!(round = advance.round, "new round");
        }
        Ok(advance)
    }

    /// Discards the running session. Nothing about it is saved.
    pub fn end_combat(&mut self) -> Result<CombatSession> {
        let session = self.session.take().ok_or(KeeperError::NoActiveSession)?;
        tracing::info!(combat = %session.name(), round = session.round(), "combat ended");
        Ok(session)
    }

    pub fn propose_end_combat(&self) -> Result<Confirmation<EndCombat>> {
        let session = self.session.as_ref().ok_or(KeeperError::NoActiveSession)?;
        Ok(Confirmation::new(
            EndCombat {
                session: session.name().to_string(),
                generation: self.generation,
            },
            "Are you sure you want to end this combat? Progress will be lost.",
        ))
    }

    pub fn confirm_end_combat(
        &mut self,
        confirmation: Confirmation<EndCombat>,
    ) -> Result<CombatSession> {
        if self.session.is_none() {
            return Err(KeeperError::NoActiveSession);
        }
        let EndCombat {
            session: proposed,
            generation,
        } = confirmation.into_subject();
        if generation != self.generation {
            tracing::warn!(combat = %proposed, "stale end-combat confirmation rejected");
            return Err(KeeperError::stale(proposed));
        }
        self.end_combat()
    }

    fn session_mut(&mut self) -> Result<&mut CombatSession> {
        self.session.as_mut().ok_or(KeeperError::NoActiveSession)
    }
}

/// Logs a rejected combat action before handing the error back.
fn rejected<T>(action: &'static str, result: Result<T>) -> Result<T> {
    if let Err(error) = &result {
        tracing::warn!(
            action,
            code = error.error_code(),
            severity = error.severity().as_str(),
            %error,
            "action rejected"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStore;
    use keeper_core::{InvestigatorForm, NpcForm, SessionPhase};

    fn keeper() -> Keeper {
        let mut keeper = Keeper::new(Arc::new(InMemoryStore::new()));
        keeper
            .investigators_mut()
            .create(&InvestigatorForm {
                name: "Ada".to_string(),
                dexterity: 70,
                constitution: 50,
                size: 50,
                ..InvestigatorForm::default()
            })
            .unwrap();
        keeper
            .npcs_mut()
            .create(&NpcForm {
                name: "Cultist".to_string(),
                dexterity: 40,
                constitution: 40,
                size: 40,
                ..NpcForm::default()
            })
            .unwrap();
        keeper
            .create_roster(
                "Ambush",
                &[FighterSelection::Npc(0), FighterSelection::Investigator(0)],
            )
            .unwrap();
        keeper
    }

    #[test]
    fn session_calls_need_a_session() {
        let mut keeper = keeper();
        assert!(matches!(keeper.begin_attack(), Err(KeeperError::NoActiveSession)));
        assert!(matches!(keeper.end_turn(), Err(KeeperError::NoActiveSession)));
        assert!(matches!(keeper.end_combat(), Err(KeeperError::NoActiveSession)));
        assert!(keeper.session_view().is_none());
    }

    #[test]
    fn blank_damage_cancels_the_attack() {
        let mut keeper = keeper();
        keeper.start_combat(0).unwrap();
        let targets = keeper.begin_attack().unwrap();

        assert_eq!(keeper.resolve_attack(targets[0], "  ").unwrap(), None);
        let view = keeper.session_view().unwrap();
        assert_eq!(view.phase, SessionPhase::InProgress);
        assert_eq!(view.turn, 0);
    }

    #[test]
    fn invalid_target_keeps_waiting() {
        let mut keeper = keeper();
        keeper.start_combat(0).unwrap();
        keeper.begin_attack().unwrap();

        assert!(matches!(
            keeper.resolve_attack(CombatantId(99), "3"),
            Err(KeeperError::Combat(CombatError::InvalidTarget { .. }))
        ));
        assert_eq!(
            keeper.session().unwrap().phase(),
            SessionPhase::SelectingTarget
        );
    }

    #[test]
    fn end_combat_confirmation() {
        let mut keeper = keeper();
        keeper.start_combat(0).unwrap();

        let confirmation = keeper.propose_end_combat().unwrap();
        assert_eq!(
            confirmation.prompt(),
            "Are you sure you want to end this combat? Progress will be lost."
        );
        drop(confirmation);
        assert!(keeper.session().is_some());

        let confirmation = keeper.propose_end_combat().unwrap();
        let ended = keeper.confirm_end_combat(confirmation).unwrap();
        assert_eq!(ended.name(), "Ambush");
        assert!(keeper.session().is_none());
    }

    #[test]
    fn end_combat_confirmation_does_not_survive_a_restart() {
        let mut keeper = keeper();
        keeper.start_combat(0).unwrap();
        let confirmation = keeper.propose_end_combat().unwrap();

        keeper.start_combat(0).unwrap();
        keeper.end_turn().unwrap();

        assert!(matches!(
            keeper.confirm_end_combat(confirmation),
            Err(KeeperError::StaleConfirmation { .. })
        ));
        assert_eq!(keeper.session().unwrap().turn(), 1);

        let confirmation = keeper.propose_end_combat().unwrap();
        keeper.confirm_end_combat(confirmation).unwrap();
        assert!(keeper.session().is_none());
    }

    #[test]
    fn huge_damage_defeats_instead_of_cancelling() {
        let mut keeper = keeper();
        keeper.start_combat(0).unwrap();
        let targets = keeper.begin_attack().unwrap();

        let report = keeper
            .resolve_attack(targets[0], "4294967296")
            .unwrap()
            .unwrap();
        assert!(report.defeated);
        assert_eq!(report.damage, u32::MAX);
        assert_eq!(keeper.session().unwrap().len(), 1);
    }

    #[test]
    fn unknown_selection_creates_nothing() {
        let mut keeper = keeper();
        assert!(keeper
            .create_roster("Bad", &[FighterSelection::Investigator(5)])
            .is_err());
        assert_eq!(keeper.rosters().list().len(), 1);
    }
}
