use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MAX_DEMO_USERS: u32 = 10_000;
pub const DEFAULT_DEMO_USERS: u32 = 100;
pub const DEFAULT_DEMO_PASSWORD: &str = "password";

/// Demo accounts (`user0`..`userN-1`) created at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub demo_users: u32,
    pub demo_password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_users: DEFAULT_DEMO_USERS,
            demo_password: String::from(DEFAULT_DEMO_PASSWORD),
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.demo_users > MAX_DEMO_USERS {
            return Err(ConfigError::config(format!(
                "seed.demo_users must be 0-{}, got {}",
                MAX_DEMO_USERS, self.demo_users
            )));
        }

        if self.demo_users > 0 && self.demo_password.is_empty() {
            return Err(ConfigError::config(
                "seed.demo_password cannot be empty when demo users are enabled",
            ));
        }

        Ok(())
    }
}
