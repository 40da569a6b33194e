//! User spell catalog.

use std::sync::Arc;

use keeper_core::{Fighter, Spell, ValidationError};

use super::RecordStore;
use super::collection::Collection;
use super::confirm::{Confirmation, Deletion};
use crate::error::Result;

/// Storage key of the spell catalog.
pub const SPELLS_KEY: &str = "CoC7e_UserSpells";

/// Whether [`SpellRepository::upsert`] inserted or replaced a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Upsert {
    Added,
    Updated,
}

/// Spells sorted by name, unique case-insensitively.
pub struct SpellRepository {
    spells: Collection<Spell>,
}

impl SpellRepository {
    pub fn load(store: Arc<dyn RecordStore>) -> Self {
        Self {
            spells: Collection::sorted(store, SPELLS_KEY, "spell"),
        }
    }

    pub fn list(&self) -> &[Spell] {
        self.spells.items()
    }

    pub fn find(&self, name: &str) -> Option<&Spell> {
        self.spells
            .position(name)
            .and_then(|index| self.spells.items().get(index))
    }

    /// Adds `spell`, or replaces the entry with the same name ignoring case.
    pub fn upsert(&mut self, spell: Spell) -> Result<Upsert> {
        let name = spell.name.clone();
        let outcome = match self.spells.position(&spell.name) {
            Some(index) => {
                self.spells.replace(index, spell)?;
                Upsert::Updated
            }
            None => {
                self.spells.insert(spell);
                Upsert::Added
            }
        };
        tracing::info!(spell = %name, %outcome, "spell saved");
        Ok(outcome)
    }

    pub fn propose_delete(&self, name: &str) -> Result<Confirmation<Deletion>> {
        let index = self
            .spells
            .position(name)
            .ok_or_else(|| ValidationError::unknown("spell", name.trim()))?;
        Ok(self.spells.propose_delete(index, |name| {
            format!("Are you sure you want to delete the spell: {name}?")
        })?)
    }

    pub fn confirm_delete(&mut self, confirmation: Confirmation<Deletion>) -> Result<Spell> {
        let spell = self.spells.confirm_delete(confirmation)?;
        tracing::info!(spell = %spell.name, "spell deleted");
        Ok(spell)
    }
}

/// Adds a catalog spell to `fighter`'s known spells.
pub(crate) fn teach(
    fighter: &mut Fighter,
    catalog: &SpellRepository,
    spell: &str,
) -> std::result::Result<(), ValidationError> {
    let spell = catalog
        .find(spell)
        .ok_or_else(|| ValidationError::unknown("spell", spell.trim()))?;
    if fighter.knows_spell(&spell.name) {
        return Err(ValidationError::AlreadyAssigned {
            name: spell.name.clone(),
            owner: fighter.name.clone(),
        });
    }
    fighter.spells.push(spell.name.clone());
    Ok(())
}
