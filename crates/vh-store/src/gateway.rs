//! Roster snapshot persistence across process restarts.
//!
//! The session mirrors every roster mutation here and restores the
//! snapshot on startup. Loading degrades to `None` on any failure — a
//! corrupt or missing autosave starts a fresh encounter rather than
//! blocking the tracker.

use std::fs;
use std::path::Path;

use vh_core::Roster;

use crate::error::StoreResult;

/// Write the roster snapshot to a JSON file.
pub fn save_roster(path: &Path, roster: &Roster) -> StoreResult<()> {
    let data = serde_json::to_string_pretty(roster)?;
    fs::write(path, data)?;
    Ok(())
}

/// Read a roster snapshot back. Missing or unreadable files yield `None`.
pub fn load_roster(path: &Path) -> Option<Roster> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}
