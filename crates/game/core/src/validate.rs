//! Input validation shared by every form and action.
//!
//! Numeric fields reach the domain already clamped by [`clamp_number`]; the
//! only numeric input that can still abort an operation is a damage amount,
//! parsed with [`parse_damage`].

use crate::error::{ErrorSeverity, GameError};

/// Upper bound for investigator characteristics (DEX, STR, CON, SIZ, POW).
pub const CHARACTERISTIC_MAX: u32 = 100;

/// Upper bound for a weapon's bonus/penalty dice.
pub const BONUS_DICE_MAX: u32 = 5;

/// Validation failures reported inline to the user. Nothing is mutated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{kind} \"{name}\" already exists")]
    Duplicate { kind: &'static str, name: String },

    #[error("{kind} \"{name}\" does not exist")]
    UnknownReference { kind: &'static str, name: String },

    #[error("\"{name}\" is already known by {owner}")]
    AlreadyAssigned { name: String, owner: String },

    #[error("a roster needs at least one fighter")]
    EmptyRoster,

    #[error("no {kind} at position {index} (have {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn duplicate(kind: &'static str, name: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            name: name.into(),
        }
    }

    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownReference {
            kind,
            name: name.into(),
        }
    }

    pub fn out_of_range(kind: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }
}

impl GameError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // A stale index is resolved by re-reading the list.
            Self::IndexOutOfRange { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::Duplicate { .. } => "duplicate",
            Self::UnknownReference { .. } => "unknown_reference",
            Self::AlreadyAssigned { .. } => "already_assigned",
            Self::EmptyRoster => "empty_roster",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
        }
    }
}

/// Parses a numeric form field into a non-negative integer.
///
/// Non-numeric and negative input collapse to `0`; values above `max` are
/// clamped to `max`. Only the leading integer part is considered, so `"12abc"`
/// reads as `12`.
pub fn clamp_number(raw: &str, max: Option<u32>) -> u32 {
    let value = leading_integer(raw).unwrap_or(0).max(0);
    let value = u32::try_from(value).unwrap_or(u32::MAX);
    match max {
        Some(max) => value.min(max),
        None => value,
    }
}

/// Parses a damage amount entered for an attack.
///
/// Returns `None` for empty, non-numeric or negative input; the caller treats
/// that as a cancelled attack. Amounts past `u32::MAX` saturate.
pub fn parse_damage(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = leading_integer(trimmed)?;
    if value < 0 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Returns a required text field trimmed, or `MissingField` when blank.
pub fn require_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(trimmed.to_string())
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long inputs rather than failing.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_number_rejects_garbage_and_negatives() {
        assert_eq!(clamp_number("abc", None), 0);
        assert_eq!(clamp_number("", None), 0);
        assert_eq!(clamp_number("-7", None), 0);
        assert_eq!(clamp_number(" 42 ", None), 42);
        assert_eq!(clamp_number("12abc", None), 12);
    }

    #[test]
    fn clamp_number_applies_max() {
        assert_eq!(clamp_number("150", Some(CHARACTERISTIC_MAX)), 100);
        assert_eq!(clamp_number("99", Some(CHARACTERISTIC_MAX)), 99);
        assert_eq!(clamp_number("9", Some(BONUS_DICE_MAX)), 5);
    }

    #[test]
    fn parse_damage_treats_blank_and_invalid_as_cancel() {
        assert_eq!(parse_damage(""), None);
        assert_eq!(parse_damage("   "), None);
        assert_eq!(parse_damage("lots"), None);
        assert_eq!(parse_damage("-3"), None);
        assert_eq!(parse_damage("0"), Some(0));
        assert_eq!(parse_damage(" 15 "), Some(15));
        assert_eq!(parse_damage("4294967296"), Some(u32::MAX));
        assert_eq!(parse_damage("99999999999999999999999"), Some(u32::MAX));
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("  Jane ", "name").unwrap(), "Jane");
        assert_eq!(
            require_text("   ", "name"),
            Err(ValidationError::missing("name"))
        );
    }
}
