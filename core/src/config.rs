//! Engine configuration.
//!
//! Loaded from a JSON file by the runner; tests use `SimConfig::default()`
//! or build one inline.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Keep an in-memory event log of every placement, turn and move.
    pub record_events: bool,
}

impl SimConfig {
    /// Load from a JSON file. Missing fields fall back to their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: SimConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        Ok(config)
    }

    pub fn with_events(mut self) -> Self {
        self.record_events = true;
        self
    }
}
