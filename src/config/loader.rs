//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    OrderBySettings,
};

/// File name looked up by [`load_from_dir`].
pub const CONFIG_FILE_NAME: &str = ".order-by.json";

/// Loads settings from `.order-by.json` in the given directory.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed successfully
/// - `Ok(None)`: the file does not exist
/// - `Err(ConfigError)`: read or parse failure
pub fn load_from_dir(dir: &Path) -> Result<Option<OrderBySettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

/// Loads settings from an explicit path. A missing file is an error here.
pub fn load_from_file(path: &Path) -> Result<OrderBySettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let settings: OrderBySettings = serde_json::from_str(&content)?;

    Ok(settings)
}
