//! Domain error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is fatal to the statement being built: callers get the error
/// back and decide whether to abort or retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An invoice referenced a play that is not in the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(PlayId),

    /// A play's genre has no registered pricing/credit rule.
    #[error("unsupported genre: {0}")]
    UnsupportedGenre(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn unknown_play(id: PlayId) -> Self {
        Self::UnknownPlay(id)
    }

    pub fn unsupported_genre(genre: impl Into<String>) -> Self {
        Self::UnsupportedGenre(genre.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
