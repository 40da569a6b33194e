//! Weapon catalog records.

use crate::validate::{BONUS_DICE_MAX, ValidationError, require_text};

/// A weapon NPCs can carry.
///
/// Stored as `{name, skill, damage, flagBonus, flagBuild}` where `flagBuild`
/// is `0`/`1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    /// Skill used to attack, e.g. "Fighting (Brawl)".
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill: String,
    /// Damage dice, e.g. "1D3". Never evaluated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: String,
    #[cfg_attr(feature = "serde", serde(rename = "flagBonus", default))]
    pub bonus_dice: u32,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "flagBuild", default, with = "flag")
    )]
    pub uses_damage_bonus: bool,
}

impl Weapon {
    /// Validates a submitted weapon. `bonus_dice` is capped at 5.
    pub fn new(
        name: &str,
        skill: &str,
        damage: &str,
        bonus_dice: u32,
        uses_damage_bonus: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text(name, "weapon name")?,
            skill: require_text(skill, "skill")?,
            damage: require_text(damage, "damage")?,
            bonus_dice: bonus_dice.min(BONUS_DICE_MAX),
            uses_damage_bonus,
        })
    }

    /// Damage notation with the wielder's bonus appended when applicable.
    pub fn damage_with_bonus(&self, damage_bonus: &str) -> String {
        if !self.uses_damage_bonus || damage_bonus == "0" {
            return self.damage.clone();
        }
        if damage_bonus.starts_with('-') || damage_bonus.starts_with('+') {
            format!("{}{damage_bonus}", self.damage)
        } else {
            format!("{}+{damage_bonus}", self.damage)
        }
    }
}

#[cfg(feature = "serde")]
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u64::deserialize(deserializer)? >= 1)
    }
}
