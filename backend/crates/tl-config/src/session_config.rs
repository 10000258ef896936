use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_COOKIE_NAME: &str = "timeline-session";
pub const MIN_SESSION_TTL_SECS: u64 = 30;
pub const MAX_SESSION_TTL_SECS: u64 = 86_400;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 300;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    /// Session lifetime, also used as the cookie Max-Age
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let name_ok = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !name_ok {
            return Err(ConfigError::session(format!(
                "session.cookie_name must be non-empty and contain only [A-Za-z0-9_-], got '{}'",
                self.cookie_name
            )));
        }

        if self.ttl_secs < MIN_SESSION_TTL_SECS || self.ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(ConfigError::session(format!(
                "session.ttl_secs must be {}-{}, got {}",
                MIN_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, self.ttl_secs
            )));
        }

        Ok(())
    }
}
