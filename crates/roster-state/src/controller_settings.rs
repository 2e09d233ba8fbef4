use roster_config::Config;

/// Knobs the controller needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Store key of the persisted snapshot
    pub storage_key: String,
    /// Users fetched on boot and refresh
    pub page_size: u32,
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            storage_key: config.storage.key.clone(),
            page_size: config.remote.page_size,
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
