//! Spell catalog records.

use crate::validate::{ValidationError, require_text};

/// Casting cost in magic, sanity and power points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cost {
    #[cfg_attr(feature = "serde", serde(rename = "MP"))]
    pub magic: u32,
    #[cfg_attr(feature = "serde", serde(rename = "SP"))]
    pub sanity: u32,
    #[cfg_attr(feature = "serde", serde(rename = "PP"))]
    pub power: u32,
}

impl Cost {
    pub const fn new(magic: u32, sanity: u32, power: u32) -> Self {
        Self {
            magic,
            sanity,
            power,
        }
    }

    pub const fn is_free(&self) -> bool {
        self.magic == 0 && self.sanity == 0 && self.power == 0
    }

    /// Renders `"<spell>: MP - 3, SP - 1"`, or `"<spell>: No Cost"`.
    pub fn describe(&self, spell_name: &str) -> String {
        let parts: Vec<String> = [("MP", self.magic), ("SP", self.sanity), ("PP", self.power)]
            .into_iter()
            .filter(|(_, amount)| *amount > 0)
            .map(|(label, amount)| format!("{label} - {amount}"))
            .collect();

        if parts.is_empty() {
            format!("{spell_name}: No Cost")
        } else {
            format!("{spell_name}: {}", parts.join(", "))
        }
    }
}

/// A learnable spell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: Cost,
    /// Free-text conjuring time, e.g. "1 round".
    #[cfg_attr(feature = "serde", serde(rename = "time", default))]
    pub casting_time: String,
}

impl Spell {
    /// Validates and normalises a submitted spell.
    ///
    /// Name and casting time are required.
    pub fn new(
        name: &str,
        cost: Cost,
        casting_time: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text(name, "spell name")?,
            cost,
            casting_time: require_text(casting_time, "conjuring time")?,
        })
    }

    pub fn cost_summary(&self) -> String {
        self.cost.describe(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_only_nonzero_costs() {
        assert_eq!(
            Cost::new(3, 1, 0).describe("Shrivelling"),
            "Shrivelling: MP - 3, SP - 1"
        );
        assert_eq!(Cost::default().describe("Dream Vision"), "Dream Vision: No Cost");
        assert!(Cost::default().is_free());
    }

    #[test]
    fn requires_name_and_time() {
        assert_eq!(
            Spell::new("", Cost::default(), "1 round"),
            Err(ValidationError::missing("spell name"))
        );
        assert_eq!(
            Spell::new("Shrivelling", Cost::default(), "  "),
            Err(ValidationError::missing("conjuring time"))
        );
        let spell = Spell::new(" Shrivelling ", Cost::new(5, 1, 0), "1 round").unwrap();
        assert_eq!(spell.name, "Shrivelling");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reads_legacy_layout() {
        let spell: Spell = serde_json::from_str(
            r#"{"name":"Shrivelling","cost":{"MP":5,"SP":1,"PP":0},"time":"1 round"}"#,
        )
        .unwrap();
        assert_eq!(spell.cost, Cost::new(5, 1, 0));
        assert_eq!(spell.casting_time, "1 round");
    }
}
