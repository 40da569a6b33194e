//! Damage application.

/// Result of subtracting damage from a hit point pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Hit points after subtraction. Not clamped; may be negative.
    pub remaining: i64,
}

impl DamageOutcome {
    /// A fighter at zero or fewer hit points is defeated.
    #[inline]
    pub const fn is_defeat(&self) -> bool {
        self.remaining <= 0
    }

    /// Remaining hit points as a stored (non-negative) value.
    pub fn stored(&self) -> u32 {
        u32::try_from(self.remaining.max(0)).unwrap_or(u32::MAX)
    }
}

/// Subtracts manually entered damage from current hit points.
pub fn apply_damage(current_hp: u32, damage: u32) -> DamageOutcome {
    DamageOutcome {
        remaining: i64::from(current_hp) - i64::from(damage),
    }
}
