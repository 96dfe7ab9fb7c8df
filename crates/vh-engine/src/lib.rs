//! Initiative engine for Vorhut.
//!
//! Rolls a d20 plus modifier for every entity that needs one, orders the
//! roster by total, and resolves equal totals through an interactive
//! [`TieResolutionSession`]: tied entities collect secondary scores, residual
//! collisions narrow the session, and the final order is
//! (total descending, tie-breaker descending).

pub mod dice;
pub mod engine;
pub mod error;
pub mod session;

pub use dice::d20;
pub use engine::{RollOutcome, roll_all};
pub use error::{EngineError, EngineResult};
pub use session::{Contender, FinalizeOutcome, TieResolutionSession};
