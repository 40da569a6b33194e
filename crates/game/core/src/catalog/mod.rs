//! Spell and weapon catalogs referenced by name from fighters.

mod spell;
mod weapon;

pub use spell::{Cost, Spell};
pub use weapon::Weapon;

/// Case-insensitive ordering used by every sorted catalog and roster list.
pub fn name_order(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
