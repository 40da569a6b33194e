//! Saved combat rosters.

use std::sync::Arc;

use keeper_core::{CombatRoster, Fighter};

use super::RecordStore;
use super::collection::Collection;
use super::confirm::{Confirmation, Deletion};
use crate::error::Result;

/// Storage key of the roster list.
pub const ROSTERS_KEY: &str = "coc_combats_db";

/// Rosters in creation order.
pub struct RosterRepository {
    rosters: Collection<CombatRoster>,
}

impl RosterRepository {
    pub fn load(store: Arc<dyn RecordStore>) -> Self {
        Self {
            rosters: Collection::unsorted(store, ROSTERS_KEY, "roster"),
        }
    }

    pub fn list(&self) -> &[CombatRoster] {
        self.rosters.items()
    }

    pub fn get(&self, index: usize) -> Result<&CombatRoster> {
        Ok(self.rosters.get(index)?)
    }

    /// Saves a roster of fighter copies and returns its index.
    pub fn create(&mut self, name: &str, fighters: Vec<Fighter>) -> Result<usize> {
        let roster = CombatRoster::new(name, fighters)?;
        tracing::info!(roster = %roster.name, fighters = roster.len(), "roster created");
        Ok(self.rosters.insert(roster))
    }

    pub fn propose_delete(&self, index: usize) -> Result<Confirmation<Deletion>> {
        Ok(self
            .rosters
            .propose_delete(index, |name| format!("Are you sure you want to delete \"{name}\"?"))?)
    }

    pub fn confirm_delete(&mut self, confirmation: Confirmation<Deletion>) -> Result<CombatRoster> {
        let roster = self.rosters.confirm_delete(confirmation)?;
        tracing::info!(roster = %roster.name, "roster deleted");
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeeperError;
    use crate::repository::InMemoryStore;
    use keeper_core::{Attributes, ValidationError};

    fn fighter(name: &str) -> Fighter {
        Fighter::investigator(
            name,
            Attributes {
                dexterity: 50,
                hit_points: 10,
                ..Attributes::default()
            },
        )
    }

    #[test]
    fn rosters_keep_creation_order() {
        let store = Arc::new(InMemoryStore::new());
        let mut rosters = RosterRepository::load(store.clone());
        rosters.create("Zoo", vec![fighter("A")]).unwrap();
        assert_eq!(rosters.create("Ambush", vec![fighter("B")]).unwrap(), 1);

        let reloaded = RosterRepository::load(store);
        let names: Vec<&str> = reloaded.list().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Zoo", "Ambush"]);
    }

    #[test]
    fn empty_roster_is_rejected() {
        let mut rosters = RosterRepository::load(Arc::new(InMemoryStore::new()));
        assert!(matches!(
            rosters.create("Ambush", Vec::new()),
            Err(KeeperError::Validation(ValidationError::EmptyRoster))
        ));
        assert!(matches!(
            rosters.create("  ", vec![fighter("A")]),
            Err(KeeperError::Validation(ValidationError::MissingField { .. }))
        ));
    }

    #[test]
    fn delete_by_confirmation() {
        let mut rosters = RosterRepository::load(Arc::new(InMemoryStore::new()));
        rosters.create("Ambush", vec![fighter("A")]).unwrap();

        let confirmation = rosters.propose_delete(0).unwrap();
        assert_eq!(
            confirmation.prompt(),
            "Are you sure you want to delete \"Ambush\"?"
        );
        drop(confirmation);
        assert_eq!(rosters.list().len(), 1);

        let confirmation = rosters.propose_delete(0).unwrap();
        let removed = rosters.confirm_delete(confirmation).unwrap();
        assert_eq!(removed.name, "Ambush");
        assert!(rosters.list().is_empty());
    }
}
