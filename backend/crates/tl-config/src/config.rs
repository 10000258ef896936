use crate::{
    BroadcastConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, DatabaseConfig, LoggingConfig, SeedConfig, ServerConfig,
    SessionConfig, TimelineConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub broadcast: BroadcastConfig,
    pub session: SessionConfig,
    pub timeline: TimelineConfig,
    pub seed: SeedConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Read `.env` from the working directory if present
    /// 2. Check for TL_CONFIG_DIR env var, else use ./.timeline/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply TL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TL_CONFIG_DIR env var > ./.timeline/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.broadcast.validate()?;
        self.session.validate()?;
        self.timeline.validate()?;
        self.seed.validate()?;
        Ok(())
    }

    /// Absolute path to the database file, `None` for an in-memory database.
    pub fn database_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        if self.database.is_in_memory() {
            return Ok(None);
        }
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.database.path)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs the demo password).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} subscribers)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  broadcast: intake={}, per-subscriber={}, cleanup={}",
            self.broadcast.intake_capacity,
            self.broadcast.subscriber_capacity,
            self.broadcast.cleanup_capacity
        );
        info!(
            "  session: cookie={}, ttl={}s",
            self.session.cookie_name, self.session.ttl_secs
        );
        info!("  timeline: snapshot={}", self.timeline.snapshot_limit);
        info!("  seed: {} demo users", self.seed.demo_users);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TL_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TL_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "TL_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("TL_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("TL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TL_LOG_FILE", &mut self.logging.file);

        // Broadcast
        Self::apply_env_parse(
            "TL_BROADCAST_INTAKE_CAPACITY",
            &mut self.broadcast.intake_capacity,
        );
        Self::apply_env_parse(
            "TL_BROADCAST_SUBSCRIBER_CAPACITY",
            &mut self.broadcast.subscriber_capacity,
        );
        Self::apply_env_parse(
            "TL_BROADCAST_CLEANUP_CAPACITY",
            &mut self.broadcast.cleanup_capacity,
        );

        // Session
        Self::apply_env_string("TL_SESSION_COOKIE_NAME", &mut self.session.cookie_name);
        Self::apply_env_parse("TL_SESSION_TTL_SECS", &mut self.session.ttl_secs);

        // Timeline
        Self::apply_env_parse(
            "TL_TIMELINE_SNAPSHOT_LIMIT",
            &mut self.timeline.snapshot_limit,
        );

        // Seed
        Self::apply_env_parse("TL_SEED_DEMO_USERS", &mut self.seed.demo_users);
        Self::apply_env_string("TL_SEED_DEMO_PASSWORD", &mut self.seed.demo_password);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
