//! Common error infrastructure for rogue-core.
//!
//! Domain-specific errors (e.g., `PackError`, `AttackError`) are defined in
//! their respective modules alongside the actions they validate. This module
//! only holds the classification shared by all of them.
//!
//! Ordinary game outcomes (a pack bouncing off a full node, a cornered flee,
//! an unknown command) are never errors: they are returned as outcome values
//! and the caller branches on them.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request can be retried later or replaced by another action.
    ///
    /// Examples: input stream closed, game already finished
    Recoverable,

    /// Invalid request, should not be retried unchanged.
    ///
    /// Examples: attacking the player, moving a pack to a non-adjacent node
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: pack listed at a node it does not occupy
    Internal,

    /// The simulation cannot continue.
    ///
    /// Examples: dungeon graph without a route to the exit
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

/// Common trait for all rogue-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Keep `error_code` stable; tests and logs match on it
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
