//! Resource pools derived from characteristics.
//!
//! Formulas:
//! - Hit points: (CON + SIZ) / 10
//! - Magic points: POW / 5
//! - Starting sanity: POW

/// Hit points for a constitution/size pair.
pub const fn hit_points(constitution: u32, size: u32) -> u32 {
    constitution.saturating_add(size) / 10
}

/// Magic points for a power value.
pub const fn magic_points(power: u32) -> u32 {
    power / 5
}

/// Starting sanity for a power value.
pub const fn starting_sanity(power: u32) -> u32 {
    power
}

/// Returns `entered` unless it is zero, in which case `derived` is used.
///
/// Investigators may override derived pools; a blank (zero) field means
/// "compute it for me".
pub const fn or_derived(entered: u32, derived: u32) -> u32 {
    if entered == 0 { derived } else { entered }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_pools_floor() {
        assert_eq!(hit_points(50, 55), 10);
        assert_eq!(hit_points(45, 40), 8);
        assert_eq!(magic_points(54), 10);
        assert_eq!(starting_sanity(65), 65);
    }

    #[test]
    fn zero_falls_back_to_derived() {
        assert_eq!(or_derived(0, 11), 11);
        assert_eq!(or_derived(7, 11), 7);
    }
}
