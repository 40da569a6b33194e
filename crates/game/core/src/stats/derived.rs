//! Derived combat modifiers.
//!
//! Damage bonus and build are pure functions of STR + SIZ. Both read from a
//! single [`StrengthBracket`] so their breakpoints cannot drift apart.
//! NOT stored - recomputed on every display.

/// Band of the combined STR + SIZ total.
///
/// Breakpoints (inclusive upper bounds): 64, 84, 124, 164, unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StrengthBracket {
    Puny,
    Slight,
    Average,
    Strong,
    Mighty,
}

impl StrengthBracket {
    /// Classifies a raw STR + SIZ total.
    pub const fn from_total(total: u32) -> Self {
        match total {
            0..=64 => Self::Puny,
            65..=84 => Self::Slight,
            85..=124 => Self::Average,
            125..=164 => Self::Strong,
            _ => Self::Mighty,
        }
    }

    /// Classifies from the two characteristics, saturating on overflow.
    pub const fn from_characteristics(strength: u32, size: u32) -> Self {
        Self::from_total(strength.saturating_add(size))
    }

    /// Dice-notation bonus added to melee damage rolls.
    ///
    /// The engine never evaluates the dice; this is display text only.
    pub const fn damage_bonus(self) -> &'static str {
        match self {
            Self::Puny => "-2",
            Self::Slight => "-1",
            Self::Average => "0",
            Self::Strong => "+1D4",
            Self::Mighty => "+1D6",
        }
    }

    /// Numeric build modifier used by grapple/damage mechanics.
    pub const fn build(self) -> i32 {
        match self {
            Self::Puny => -2,
            Self::Slight => -1,
            Self::Average => 0,
            Self::Strong => 1,
            Self::Mighty => 2,
        }
    }
}

/// Damage bonus for a STR + SIZ pair.
pub const fn damage_bonus(strength: u32, size: u32) -> &'static str {
    StrengthBracket::from_characteristics(strength, size).damage_bonus()
}

/// Build value for a STR + SIZ pair.
pub const fn build(strength: u32, size: u32) -> i32 {
    StrengthBracket::from_characteristics(strength, size).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_agree_between_bonus_and_build() {
        let cases = [
            (0, "-2", -2),
            (64, "-2", -2),
            (65, "-1", -1),
            (84, "-1", -1),
            (85, "0", 0),
            (124, "0", 0),
            (125, "+1D4", 1),
            (164, "+1D4", 1),
            (165, "+1D6", 2),
            (400, "+1D6", 2),
        ];

        for (total, bonus, build_value) in cases {
            let bracket = StrengthBracket::from_total(total);
            assert_eq!(bracket.damage_bonus(), bonus, "bonus at {total}");
            assert_eq!(bracket.build(), build_value, "build at {total}");
        }
    }

    #[test]
    fn split_characteristics_sum_before_classifying() {
        assert_eq!(damage_bonus(80, 70), "+1D4");
        assert_eq!(build(80, 70), 1);
        assert_eq!(damage_bonus(30, 34), "-2");
        assert_eq!(build(u32::MAX, 10), 2);
    }

    #[test]
    fn repeated_calls_are_stable() {
        assert_eq!(damage_bonus(60, 65), damage_bonus(60, 65));
        assert_eq!(build(60, 65), build(60, 65));
    }
}
