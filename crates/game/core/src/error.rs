//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (e.g. [`crate::DuelError`], [`crate::StatsError`]) are
//! defined next to the operations they validate. This module provides the
//! shared classification every one of them implements.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can retry with different input
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - pick other fighters or start a new duel.
    ///
    /// Examples: duel already concluded, roster index out of range
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: defeated fighter supplied, negative base stats
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: exchange limit reached (a stalemate slipped past mitigation)
    Internal,
}

impl ErrorSeverity {
    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all arena errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ArenaError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and for matching in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
