//! Investigator records.

use std::sync::Arc;

use keeper_core::{Fighter, InvestigatorForm};

use super::RecordStore;
use super::collection::Collection;
use super::spell::{SpellRepository, teach};
use crate::error::Result;

/// Storage key of the investigator list.
pub const INVESTIGATORS_KEY: &str = "characters.json";

/// Investigators sorted by name. Names need not be unique.
pub struct InvestigatorRepository {
    investigators: Collection<Fighter>,
}

impl InvestigatorRepository {
    pub fn load(store: Arc<dyn RecordStore>) -> Self {
        Self {
            investigators: Collection::sorted(store, INVESTIGATORS_KEY, "investigator"),
        }
    }

    pub fn list(&self) -> &[Fighter] {
        self.investigators.items()
    }

    pub fn get(&self, index: usize) -> Result<&Fighter> {
        Ok(self.investigators.get(index)?)
    }

    /// Creates an investigator and returns its position in the sorted list.
    pub fn create(&mut self, form: &InvestigatorForm) -> Result<usize> {
        let investigator = form.create()?;
        tracing::info!(name = %investigator.name, "investigator created");
        Ok(self.investigators.insert(investigator))
    }

    /// Overwrites the investigator at `index`; known spells are kept.
    pub fn update(&mut self, index: usize, form: &InvestigatorForm) -> Result<usize> {
        let index = self.investigators.modify(index, |fighter| form.apply(fighter))?;
        tracing::info!(name = %form.name.trim(), "investigator updated");
        Ok(index)
    }

    /// Teaches a catalog spell to the investigator at `index`.
    pub fn learn_spell(&mut self, index: usize, spell: &str, catalog: &SpellRepository) -> Result<()> {
        self.investigators
            .modify(index, |fighter| teach(fighter, catalog, spell))?;
        Ok(())
    }
}
