//! Error types for combat session transitions.

use super::session::{CombatantId, SessionPhase};
use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced by [`super::CombatSession`] transitions.
///
/// A failed transition never mutates the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("cannot start a combat without fighters")]
    EmptyRoster,

    #[error("action requires phase {expected} but session is {actual}")]
    WrongPhase {
        expected: SessionPhase,
        actual: SessionPhase,
    },

    #[error("no fighter can be targeted")]
    NoTargets,

    #[error("fighter {target} is not a valid target")]
    InvalidTarget { target: CombatantId },

    #[error("no fighter at position {index} (have {len})")]
    InvalidTargetIndex { index: usize, len: usize },
}

impl CombatError {
    pub(crate) fn wrong_phase(expected: SessionPhase, actual: SessionPhase) -> Self {
        Self::WrongPhase { expected, actual }
    }
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyRoster => ErrorSeverity::Validation,
            Self::WrongPhase { .. }
            | Self::NoTargets
            | Self::InvalidTarget { .. }
            | Self::InvalidTargetIndex { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRoster => "empty_roster",
            Self::WrongPhase { .. } => "wrong_phase",
            Self::NoTargets => "no_targets",
            Self::InvalidTarget { .. } => "invalid_target",
            Self::InvalidTargetIndex { .. } => "invalid_target_index",
        }
    }
}
