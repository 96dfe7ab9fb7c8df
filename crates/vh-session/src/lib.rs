//! Interactive encounter session for Vorhut.
//!
//! [`EncounterSession`] owns the roster and the (possibly open)
//! tie-resolution session, processes one text command at a time, mirrors
//! every roster mutation to the autosave file, and archives concluded
//! encounters. It is the only place those pieces meet; nothing here
//! renders anything.

pub mod config;
pub mod error;
pub mod session;

pub use config::EncounterConfig;
pub use error::{SessionError, SessionResult};
pub use session::EncounterSession;
