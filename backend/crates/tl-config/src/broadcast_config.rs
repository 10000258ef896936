use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Intake queue (events awaiting fan-out)
pub const MIN_INTAKE_CAPACITY: usize = 1;
pub const MAX_INTAKE_CAPACITY: usize = 100_000;
pub const DEFAULT_INTAKE_CAPACITY: usize = 100;

// Per-subscriber queue
pub const MIN_SUBSCRIBER_CAPACITY: usize = 1;
pub const MAX_SUBSCRIBER_CAPACITY: usize = 10_000;
pub const DEFAULT_SUBSCRIBER_CAPACITY: usize = 10;

// Removal request queue
pub const MIN_CLEANUP_CAPACITY: usize = 1;
pub const MAX_CLEANUP_CAPACITY: usize = 100_000;
pub const DEFAULT_CLEANUP_CAPACITY: usize = 100;

/// Queue sizes for the timeline broadcaster.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Events buffered between producers and the fan-out worker
    pub intake_capacity: usize,
    /// Events buffered per subscriber before it is considered too slow
    pub subscriber_capacity: usize,
    /// Pending removal requests
    pub cleanup_capacity: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            intake_capacity: DEFAULT_INTAKE_CAPACITY,
            subscriber_capacity: DEFAULT_SUBSCRIBER_CAPACITY,
            cleanup_capacity: DEFAULT_CLEANUP_CAPACITY,
        }
    }
}

impl BroadcastConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "broadcast.intake_capacity",
            self.intake_capacity,
            MIN_INTAKE_CAPACITY,
            MAX_INTAKE_CAPACITY,
        )?;
        check_range(
            "broadcast.subscriber_capacity",
            self.subscriber_capacity,
            MIN_SUBSCRIBER_CAPACITY,
            MAX_SUBSCRIBER_CAPACITY,
        )?;
        check_range(
            "broadcast.cleanup_capacity",
            self.cleanup_capacity,
            MIN_CLEANUP_CAPACITY,
            MAX_CLEANUP_CAPACITY,
        )
    }
}

fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
    if value < min || value > max {
        return Err(ConfigError::broadcast(format!(
            "{name} must be {min}-{max}, got {value}"
        )));
    }
    Ok(())
}
