use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MAX_SNAPSHOT_LIMIT: u32 = 500;
pub const DEFAULT_SNAPSHOT_LIMIT: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Number of recent posts rendered into the initial snapshot
    pub snapshot_limit: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.snapshot_limit > MAX_SNAPSHOT_LIMIT {
            return Err(ConfigError::config(format!(
                "timeline.snapshot_limit must be 0-{}, got {}",
                MAX_SNAPSHOT_LIMIT, self.snapshot_limit
            )));
        }
        Ok(())
    }
}
