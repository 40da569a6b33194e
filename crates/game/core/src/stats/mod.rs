//! Derived statistics.
//!
//! Everything here is a pure function of stored characteristics:
//! - [`derived`]: damage bonus and build from STR + SIZ
//! - [`resources`]: hit points, magic points and sanity from CON, SIZ, POW

pub mod derived;
pub mod resources;

pub use derived::{StrengthBracket, build, damage_bonus};
pub use resources::{hit_points, magic_points, or_derived, starting_sanity};
