//! Common error infrastructure for keeper-core.
//!
//! Domain-specific errors (`ValidationError`, `CombatError`) live next to the
//! operations that raise them. This module provides the shared classification
//! so callers can decide how loudly to report a failure.
//!
//! Nothing in the domain is fatal: every failure degrades to a message and a
//! return to a known state. Severity only drives logging and presentation.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed after the user adjusts it.
    ///
    /// Examples: picking a target that was already removed, acting out of phase.
    Recoverable,

    /// Invalid input that must be corrected before retrying.
    ///
    /// Examples: empty name, duplicate weapon name, empty roster.
    Validation,

    /// Unexpected inconsistency between in-memory state and storage.
    Internal,

    /// Unrecoverable. Reserved; the domain never produces it.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all keeper-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for structured logging and for asserting on errors in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
