//! Fighter data model.
//!
//! A [`Fighter`] carries the attribute set shared by every combat participant
//! plus a [`FighterKind`] payload. Investigators have no extra data; NPCs add
//! combat skills and a weapon list. Code that cares about the difference
//! matches on the kind rather than dispatching through a trait object.

use crate::stats::{self, StrengthBracket};

/// Core attributes shared by investigators and NPCs.
///
/// All values are non-negative. Field names on the wire follow the legacy
/// blob layout (`dex`, `hp`, `san`, ...); absent fields read as `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Attributes {
    #[cfg_attr(feature = "serde", serde(rename = "dex"))]
    pub dexterity: u32,
    #[cfg_attr(feature = "serde", serde(rename = "hp"))]
    pub hit_points: u32,
    #[cfg_attr(feature = "serde", serde(rename = "san"))]
    pub sanity: u32,
    #[cfg_attr(feature = "serde", serde(rename = "cons"))]
    pub constitution: u32,
    #[cfg_attr(feature = "serde", serde(rename = "pow"))]
    pub power: u32,
    #[cfg_attr(feature = "serde", serde(rename = "str"))]
    pub strength: u32,
    pub size: u32,
    #[cfg_attr(feature = "serde", serde(rename = "magic"))]
    pub magic_points: u32,
}

impl Attributes {
    /// Band of STR + SIZ used by damage bonus and build.
    pub const fn strength_bracket(&self) -> StrengthBracket {
        StrengthBracket::from_characteristics(self.strength, self.size)
    }
}

/// NPC-only combat ratings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NpcTraits {
    pub fight: u32,
    pub dodge: u32,
    /// Names of weapons from the weapon catalog.
    pub weapons: Vec<String>,
}

/// Type-specific payload of a fighter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum FighterKind {
    #[cfg_attr(feature = "serde", serde(rename = "Character"))]
    Investigator,
    #[cfg_attr(feature = "serde", serde(rename = "NPC"))]
    Npc(NpcTraits),
}

/// Payload-free tag of a [`FighterKind`], for display and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FighterType {
    Investigator,
    #[strum(serialize = "NPC")]
    Npc,
}

/// Any combat participant.
///
/// `name` is a human-facing label and is not unique across types.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attributes: Attributes,
    /// Names of spells from the spell catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: Vec<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: FighterKind,
}

impl Fighter {
    /// Creates an investigator with no known spells.
    pub fn investigator(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            attributes,
            spells: Vec::new(),
            kind: FighterKind::Investigator,
        }
    }

    /// Creates an NPC with no known spells.
    pub fn npc(name: impl Into<String>, attributes: Attributes, traits: NpcTraits) -> Self {
        Self {
            name: name.into(),
            attributes,
            spells: Vec::new(),
            kind: FighterKind::Npc(traits),
        }
    }

    pub fn fighter_type(&self) -> FighterType {
        match self.kind {
            FighterKind::Investigator => FighterType::Investigator,
            FighterKind::Npc(_) => FighterType::Npc,
        }
    }

    #[inline]
    pub fn is_npc(&self) -> bool {
        matches!(self.kind, FighterKind::Npc(_))
    }

    pub fn npc_traits(&self) -> Option<&NpcTraits> {
        match &self.kind {
            FighterKind::Npc(traits) => Some(traits),
            FighterKind::Investigator => None,
        }
    }

    pub fn npc_traits_mut(&mut self) -> Option<&mut NpcTraits> {
        match &mut self.kind {
            FighterKind::Npc(traits) => Some(traits),
            FighterKind::Investigator => None,
        }
    }

    #[inline]
    pub fn dexterity(&self) -> u32 {
        self.attributes.dexterity
    }

    #[inline]
    pub fn hit_points(&self) -> u32 {
        self.attributes.hit_points
    }

    /// Damage bonus notation derived from STR + SIZ.
    pub fn damage_bonus(&self) -> &'static str {
        self.attributes.strength_bracket().damage_bonus()
    }

    /// Build value derived from STR + SIZ.
    pub fn build(&self) -> i32 {
        self.attributes.strength_bracket().build()
    }

    /// Hit points this fighter would have from CON and SIZ alone.
    pub fn derived_hit_points(&self) -> u32 {
        stats::hit_points(self.attributes.constitution, self.attributes.size)
    }

    pub fn knows_spell(&self, spell: &str) -> bool {
        self.spells.iter().any(|known| known.eq_ignore_ascii_case(spell))
    }

    pub fn carries_weapon(&self, weapon: &str) -> bool {
        self.npc_traits()
            .is_some_and(|traits| traits.weapons.iter().any(|w| w.eq_ignore_ascii_case(weapon)))
    }
}
