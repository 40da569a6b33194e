//! Unified error type surfaced by the runtime API.
//!
//! Wraps domain validation, combat transitions and storage failures so the
//! caller can report any of them through one channel.
use keeper_core::{CombatError, ErrorSeverity, GameError, ValidationError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, KeeperError>;

#[derive(Debug, Error)]
pub enum KeeperError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no combat is running")]
    NoActiveSession,

    #[error("\"{subject}\" changed since the action was proposed")]
    StaleConfirmation { subject: String },
}

impl KeeperError {
    pub(crate) fn stale(subject: impl Into<String>) -> Self {
        Self::StaleConfirmation {
            subject: subject.into(),
        }
    }
}

impl GameError for KeeperError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation(error) => error.severity(),
            Self::Combat(error) => error.severity(),
            Self::Repository(_) => ErrorSeverity::Internal,
            Self::NoActiveSession | Self::StaleConfirmation { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(error) => error.error_code(),
            Self::Combat(error) => error.error_code(),
            Self::Repository(_) => "repository",
            Self::NoActiveSession => "no_active_session",
            Self::StaleConfirmation { .. } => "stale_confirmation",
        }
    }
}
