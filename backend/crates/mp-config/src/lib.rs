mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;


pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "MERCH_CONFIG_DIR";
/// Read only for presence by the diagnostics endpoint; also feeds `database.url`
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Read only for presence by the diagnostics endpoint; also feeds `database.name`
pub const DATABASE_NAME_ENV: &str = "DATABASE_NAME";
pub const PORT_ENV: &str = "PORT";

const DEFAULT_CONFIG_DIRECTORY: &str = ".merch";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
