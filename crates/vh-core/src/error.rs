use crate::entity::EntityId;

/// Alias for `Result<T, RosterError>`.
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors that can occur when mutating a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// A player with this name is already in the roster.
    #[error("player already in the roster: \"{0}\"")]
    DuplicatePlayer(String),

    /// The requested entity ID does not exist in the roster.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),
}
