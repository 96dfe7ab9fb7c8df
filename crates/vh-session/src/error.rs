//! Error types for the encounter session.

use thiserror::Error;

use vh_core::RosterError;
use vh_engine::EngineError;
use vh_store::StoreError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving an encounter session.
///
/// None of these are fatal; every variant is reported to the caller and
/// the session keeps accepting commands.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No tie is being resolved right now.
    #[error("no tie to resolve")]
    NoActiveTie,

    /// The command would reshape the roster while a tie is open.
    #[error("resolve the open tie first")]
    TieInProgress,

    /// Nothing in the roster to operate on.
    #[error("the roster is empty")]
    EmptyRoster,

    /// No template with this name in the library.
    #[error("unknown template: \"{0}\"")]
    UnknownTemplate(String),

    /// No roster entity with this name.
    #[error("no one called \"{0}\" in the roster")]
    UnknownEntity(String),

    /// Unknown command word.
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    /// A command was malformed.
    #[error("{0}")]
    Usage(String),

    /// Roster-level rejection.
    #[error("{0}")]
    Roster(#[from] RosterError),

    /// Engine-level rejection.
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// Storage failure while preparing the session.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
