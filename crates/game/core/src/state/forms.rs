//! Submitted investigator and NPC forms.
//!
//! Numeric fields arrive already parsed by [`crate::validate::clamp_number`].
//! Each form validates completely before touching a record, so a rejected
//! submission never leaves a half-updated fighter behind.

use super::fighter::{Attributes, Fighter, FighterKind, NpcTraits};
use crate::stats;
use crate::validate::{CHARACTERISTIC_MAX, ValidationError, require_text};

/// Investigator create/edit form.
///
/// `hit_points` and `magic_points` left at `0` on creation are derived from
/// CON + SIZ and POW. On edit every value is taken as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvestigatorForm {
    pub name: String,
    pub dexterity: u32,
    pub strength: u32,
    pub constitution: u32,
    pub size: u32,
    pub power: u32,
    pub sanity: u32,
    pub hit_points: u32,
    pub magic_points: u32,
}

impl InvestigatorForm {
    fn attributes(&self) -> Attributes {
        Attributes {
            dexterity: self.dexterity.min(CHARACTERISTIC_MAX),
            strength: self.strength.min(CHARACTERISTIC_MAX),
            constitution: self.constitution.min(CHARACTERISTIC_MAX),
            size: self.size.min(CHARACTERISTIC_MAX),
            power: self.power.min(CHARACTERISTIC_MAX),
            sanity: self.sanity,
            hit_points: self.hit_points,
            magic_points: self.magic_points,
        }
    }

    /// Builds a new investigator, deriving blank resource pools.
    pub fn create(&self) -> Result<Fighter, ValidationError> {
        let name = require_text(&self.name, "name")?;
        let mut attributes = self.attributes();
        attributes.hit_points = stats::or_derived(
            attributes.hit_points,
            stats::hit_points(attributes.constitution, attributes.size),
        );
        attributes.magic_points =
            stats::or_derived(attributes.magic_points, stats::magic_points(attributes.power));

        Ok(Fighter::investigator(name, attributes))
    }

    /// Overwrites an existing investigator's name and attributes.
    ///
    /// Known spells are kept.
    pub fn apply(&self, target: &mut Fighter) -> Result<(), ValidationError> {
        let name = require_text(&self.name, "name")?;
        target.name = name;
        target.attributes = self.attributes();
        Ok(())
    }
}

/// NPC create/edit form.
///
/// Hit points, sanity and magic points are always derived.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NpcForm {
    pub name: String,
    pub fight: u32,
    pub dexterity: u32,
    pub strength: u32,
    pub size: u32,
    pub constitution: u32,
    pub dodge: u32,
    pub power: u32,
}

impl NpcForm {
    fn attributes(&self) -> Attributes {
        Attributes {
            dexterity: self.dexterity,
            strength: self.strength,
            size: self.size,
            constitution: self.constitution,
            power: self.power,
            hit_points: stats::hit_points(self.constitution, self.size),
            sanity: stats::starting_sanity(self.power),
            magic_points: stats::magic_points(self.power),
        }
    }

    pub fn create(&self) -> Result<Fighter, ValidationError> {
        let name = require_text(&self.name, "name")?;
        Ok(Fighter::npc(
            name,
            self.attributes(),
            NpcTraits {
                fight: self.fight,
                dodge: self.dodge,
                weapons: Vec::new(),
            },
        ))
    }

    /// Overwrites an existing NPC, recomputing derived pools.
    ///
    /// Known spells and carried weapons are kept.
    pub fn apply(&self, target: &mut Fighter) -> Result<(), ValidationError> {
        let name = require_text(&self.name, "name")?;
        let weapons = target
            .npc_traits_mut()
            .map(|traits| std::mem::take(&mut traits.weapons))
            .unwrap_or_default();

        target.name = name;
        target.attributes = self.attributes();
        target.kind = FighterKind::Npc(NpcTraits {
            fight: self.fight,
            dodge: self.dodge,
            weapons,
        });
        Ok(())
    }
}
