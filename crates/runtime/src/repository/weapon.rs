//! User weapon catalog.

use std::sync::Arc;

use keeper_core::{Fighter, ValidationError, Weapon};

use super::RecordStore;
use super::collection::Collection;
use super::confirm::{Confirmation, Deletion};
use crate::error::Result;

/// Storage key of the weapon catalog.
pub const WEAPONS_KEY: &str = "CoC7e_UserWeapons";

/// Weapons sorted by name. Names are unique ignoring case.
pub struct WeaponRepository {
    weapons: Collection<Weapon>,
}

impl WeaponRepository {
    pub fn load(store: Arc<dyn RecordStore>) -> Self {
        Self {
            weapons: Collection::sorted(store, WEAPONS_KEY, "weapon"),
        }
    }

    pub fn list(&self) -> &[Weapon] {
        self.weapons.items()
    }

    pub fn find(&self, name: &str) -> Option<&Weapon> {
        self.weapons
            .position(name)
            .and_then(|index| self.weapons.items().get(index))
    }

    /// Adds a new weapon and returns its position in the sorted list.
    pub fn add(&mut self, weapon: Weapon) -> Result<usize> {
        if self.weapons.position(&weapon.name).is_some() {
            return Err(ValidationError::duplicate("weapon", weapon.name).into());
        }
        tracing::info!(weapon = %weapon.name, "weapon added");
        Ok(self.weapons.insert(weapon))
    }

    pub fn propose_delete(&self, name: &str) -> Result<Confirmation<Deletion>> {
        let index = self
            .weapons
            .position(name)
            .ok_or_else(|| ValidationError::unknown("weapon", name.trim()))?;
        Ok(self.weapons.propose_delete(index, |name| {
            format!("Are you sure you want to delete the weapon: {name}?")
        })?)
    }

    pub fn confirm_delete(&mut self, confirmation: Confirmation<Deletion>) -> Result<Weapon> {
        let weapon = self.weapons.confirm_delete(confirmation)?;
        tracing::info!(weapon = %weapon.name, "weapon deleted");
        Ok(weapon)
    }
}

/// Adds a catalog weapon to an NPC's weapon list.
pub(crate) fn equip(
    fighter: &mut Fighter,
    catalog: &WeaponRepository,
    weapon: &str,
) -> std::result::Result<(), ValidationError> {
    let weapon = catalog
        .find(weapon)
        .ok_or_else(|| ValidationError::unknown("weapon", weapon.trim()))?;
    if fighter.carries_weapon(&weapon.name) {
        return Err(ValidationError::AlreadyAssigned {
            name: weapon.name.clone(),
            owner: fighter.name.clone(),
        });
    }
    let name = fighter.name.clone();
    let traits = fighter
        .npc_traits_mut()
        .ok_or_else(|| ValidationError::unknown("npc", name))?;
    traits.weapons.push(weapon.name.clone());
    Ok(())
}
