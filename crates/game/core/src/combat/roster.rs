//! Saved combat rosters.

use crate::state::Fighter;
use crate::validate::{ValidationError, require_text};

/// A named, reusable list of fighters.
///
/// Fighters are held by value: they are copies of the repository records at
/// the time the roster was created and do not follow later edits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatRoster {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fighters: Vec<Fighter>,
}

impl CombatRoster {
    /// Creates a roster. Fails on a blank name or an empty fighter list.
    pub fn new(name: &str, fighters: Vec<Fighter>) -> Result<Self, ValidationError> {
        let name = require_text(name, "combat name")?;
        if fighters.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        Ok(Self { name, fighters })
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }
}
