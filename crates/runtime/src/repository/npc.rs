//! Non-player character records.

use std::sync::Arc;

use keeper_core::{Fighter, NpcForm};

use super::RecordStore;
use super::collection::Collection;
use super::spell::{SpellRepository, teach};
use super::weapon::{WeaponRepository, equip};
use crate::error::Result;

/// Storage key of the NPC list.
pub const NPCS_KEY: &str = "npcs.json";

/// A carried weapon resolved against the catalog for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArmedWeapon {
    pub name: String,
    pub skill: String,
    /// Damage notation including the wielder's damage bonus when the weapon uses it.
    pub damage: String,
}

/// NPCs sorted by name.
///
/// Hit points, sanity and magic points are always derived from the form.
pub struct NpcRepository {
    npcs: Collection<Fighter>,
}

impl NpcRepository {
    pub fn load(store: Arc<dyn RecordStore>) -> Self {
        Self {
            npcs: Collection::sorted(store, NPCS_KEY, "npc"),
        }
    }

    pub fn list(&self) -> &[Fighter] {
        self.npcs.items()
    }

    pub fn get(&self, index: usize) -> Result<&Fighter> {
        Ok(self.npcs.get(index)?)
    }

    pub fn create(&mut self, form: &NpcForm) -> Result<usize> {
        let npc = form.create()?;
        tracing::info!(name = %npc.name, "npc created");
        Ok(self.npcs.insert(npc))
    }

    /// Overwrites the NPC at `index`, keeping its spells and weapons.
    pub fn update(&mut self, index: usize, form: &NpcForm) -> Result<usize> {
        let index = self.npcs.modify(index, |fighter| form.apply(fighter))?;
        tracing::info!(name = %form.name.trim(), "npc updated");
        Ok(index)
    }

    pub fn learn_spell(&mut self, index: usize, spell: &str, catalog: &SpellRepository) -> Result<()> {
        self.npcs.modify(index, |fighter| teach(fighter, catalog, spell))?;
        Ok(())
    }

    /// Weapons carried by the NPC at `index`, with its damage bonus applied.
    ///
    /// Names no longer in the catalog are skipped.
    pub fn arsenal(&self, index: usize, catalog: &WeaponRepository) -> Result<Vec<ArmedWeapon>> {
        let npc = self.npcs.get(index)?;
        let damage_bonus = npc.damage_bonus();
        let carried = npc
            .npc_traits()
            .map(|traits| traits.weapons.as_slice())
            .unwrap_or_default();

        Ok(carried
            .iter()
            .filter_map(|name| catalog.find(name))
            .map(|weapon| ArmedWeapon {
                name: weapon.name.clone(),
                skill: weapon.skill.clone(),
                damage: weapon.damage_with_bonus(damage_bonus),
            })
            .collect())
    }

    /// Hands a catalog weapon to the NPC at `index`.
    pub fn arm(&mut self, index: usize, weapon: &str, catalog: &WeaponRepository) -> Result<()> {
        self.npcs.modify(index, |fighter| equip(fighter, catalog, weapon))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeeperError;
    use crate::repository::InMemoryStore;
    use keeper_core::{ValidationError, Weapon};

    fn cultist() -> NpcForm {
        NpcForm {
            name: "Cultist".to_string(),
            fight: 45,
            dexterity: 50,
            strength: 60,
            size: 70,
            constitution: 50,
            dodge: 25,
            power: 55,
        }
    }

    #[test]
    fn create_derives_every_pool() {
        let mut npcs = NpcRepository::load(Arc::new(InMemoryStore::new()));
        npcs.create(&cultist()).unwrap();

        let npc = npcs.get(0).unwrap();
        assert_eq!(npc.attributes.hit_points, 12);
        assert_eq!(npc.attributes.sanity, 55);
        assert_eq!(npc.attributes.magic_points, 11);
        assert_eq!(npc.damage_bonus(), "+1D4");
        assert_eq!(npc.build(), 1);
    }

    #[test]
    fn arm_and_edit_keep_weapons() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
        let mut weapons = WeaponRepository::load(store.clone());
        weapons
            .add(Weapon::new("Knife", "Fighting (Brawl)", "1D4", 0, true).unwrap())
            .unwrap();

        let mut npcs = NpcRepository::load(store.clone());
        npcs.create(&cultist()).unwrap();
        npcs.arm(0, "knife", &weapons).unwrap();
        assert!(matches!(
            npcs.arm(0, "Knife", &weapons),
            Err(KeeperError::Validation(ValidationError::AlreadyAssigned { .. }))
        ));
        assert!(matches!(
            npcs.arm(0, "Shotgun", &weapons),
            Err(KeeperError::Validation(ValidationError::UnknownReference { .. }))
        ));

        let mut tougher = cultist();
        tougher.constitution = 90;
        npcs.update(0, &tougher).unwrap();

        let npc = npcs.get(0).unwrap();
        assert_eq!(npc.attributes.hit_points, 16);
        assert_eq!(npc.npc_traits().unwrap().weapons, vec!["Knife".to_string()]);

        let reloaded = NpcRepository::load(store);
        assert_eq!(reloaded.get(0).unwrap(), npc);
    }

    #[test]
    fn arsenal_applies_damage_bonus() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
        let mut weapons = WeaponRepository::load(store.clone());
        weapons
            .add(Weapon::new("Knife", "Fighting (Brawl)", "1D4", 0, true).unwrap())
            .unwrap();
        weapons
            .add(Weapon::new("Pistol", "Firearms (Handgun)", "1D10", 0, false).unwrap())
            .unwrap();

        let mut npcs = NpcRepository::load(store);
        npcs.create(&cultist()).unwrap();
        npcs.arm(0, "Knife", &weapons).unwrap();
        npcs.arm(0, "Pistol", &weapons).unwrap();

        let arsenal = npcs.arsenal(0, &weapons).unwrap();
        let damage: Vec<&str> = arsenal.iter().map(|w| w.damage.as_str()).collect();
        assert_eq!(damage, ["1D4+1D4", "1D10"]);

        let confirmation = weapons.propose_delete("pistol").unwrap();
        weapons.confirm_delete(confirmation).unwrap();
        assert_eq!(npcs.arsenal(0, &weapons).unwrap().len(), 1);
    }

    #[test]
    fn stale_index_is_reported() {
        let mut npcs = NpcRepository::load(Arc::new(InMemoryStore::new()));
        assert!(matches!(
            npcs.update(3, &cultist()),
            Err(KeeperError::Validation(ValidationError::IndexOutOfRange { index: 3, len: 0, .. }))
        ));
    }
}
