mod config;
mod error;
mod log_level;
mod logging_config;
mod remote_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_config::RemoteConfig;
pub use storage_config::StorageConfig;

pub const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIRECTORY: &str = ".roster";
pub const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 5000;

pub const DEFAULT_STORAGE_DIRECTORY: &str = "data";
pub const DEFAULT_STORAGE_KEY: &str = "@users_list";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
