//! Error types for the initiative engine.

use vh_core::EntityId;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during initiative resolution.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Finalize was attempted while contenders still lack a tie-breaker.
    #[error("{0} contender(s) still need a tie-breaker")]
    TieBreakersMissing(usize),

    /// The entity is not part of the open tie-resolution session.
    #[error("not a tie contender: {0}")]
    UnknownContender(EntityId),
}
