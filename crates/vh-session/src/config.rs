//! Configuration for an encounter session.

use std::path::PathBuf;

/// Configuration for an encounter session.
#[derive(Debug, Clone)]
pub struct EncounterConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// Directory holding the template, autosave, and history files.
    pub data_dir: PathBuf,
}

impl EncounterConfig {
    /// Create a config for the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            seed: 42,
            data_dir: data_dir.into(),
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
