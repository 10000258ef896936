mod broadcast_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod seed_config;
mod server_config;
mod session_config;
mod timeline_config;

#[cfg(test)]
mod tests;

pub use broadcast_config::BroadcastConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use seed_config::SeedConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use timeline_config::TimelineConfig;

pub const CONFIG_DIR_ENV: &str = "TL_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIRECTORY: &str = ".timeline";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 1000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;

const DEFAULT_DATABASE_FILENAME: &str = "timeline.db";
pub const IN_MEMORY_DATABASE: &str = ":memory:";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
