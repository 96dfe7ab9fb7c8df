//! Write-once log of concluded encounters.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// One archived encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// When the encounter was archived.
    pub recorded_at: DateTime<Utc>,
    /// Free-text summary handed over by the session.
    pub summary: String,
}

/// Append-only archive of encounter summaries, persisted as one JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleArchive {
    entries: Vec<ArchiveEntry>,
}

impl BattleArchive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an archive from a JSON file. A missing file is an empty
    /// archive, not an error.
    pub fn load(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save the archive to a JSON file.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Record a summary, timestamped now. Entries are never edited or
    /// removed afterwards.
    pub fn record(&mut self, summary: impl Into<String>) {
        self.entries.push(ArchiveEntry {
            recorded_at: Utc::now(),
            summary: summary.into(),
        });
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Vec<&ArchiveEntry> {
        self.entries.iter().rev().collect()
    }

    /// Number of archived encounters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the archive is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn record_and_list_newest_first() {
        let mut archive = BattleArchive::new();
        archive.record("Battle finished: Kira, Goblin");
        archive.record("Battle finished: Kira, Orc");

        let entries = archive.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].summary, "Battle finished: Kira, Orc");
        assert_eq!(entries[1].summary, "Battle finished: Kira, Goblin");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let mut archive = BattleArchive::new();
        archive.record("Battle finished: Kira");
        archive.save(&path).unwrap();

        let back = BattleArchive::load(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.entries()[0].summary, "Battle finished: Kira");
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let archive = BattleArchive::load(&dir.path().join("history.json")).unwrap();
        assert!(archive.is_empty());
    }
}
