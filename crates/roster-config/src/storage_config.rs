use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIRECTORY, DEFAULT_STORAGE_KEY};

use std::path::Path;

use serde::Deserialize;

/// Where the list snapshot is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory relative to the config dir
    pub dir: String,
    /// Key of the single slot holding the list
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIRECTORY),
            key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        if self.key.trim().is_empty() {
            return Err(ConfigError::storage("storage.key cannot be empty"));
        }

        Ok(())
    }
}
