//! Holds the current, validated settings.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    OrderBySettings,
    loader,
};

/// Keeps the active [`OrderBySettings`] and where they came from.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    current_settings: OrderBySettings,

    /// Directory the settings were looked up in
    config_dir: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: OrderBySettings::default(), config_dir: None }
    }

    /// Loads `.order-by.json` from `config_dir`, falling back to defaults
    /// when there is no directory or no file.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, config_dir: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from directory: {:?}", config_dir);

        let settings = if let Some(dir) = &config_dir {
            loader::load_from_dir(dir)?.unwrap_or_default()
        } else {
            OrderBySettings::default()
        };

        self.apply(settings)?;
        self.config_dir = config_dir;

        Ok(())
    }

    /// Loads settings from an explicit file; its parent becomes the config directory.
    pub fn load_settings_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let settings = loader::load_from_file(path)?;

        self.apply(settings)?;
        self.config_dir = path.parent().map(Path::to_path_buf);

        Ok(())
    }

    /// Replaces the current settings after validating them.
    pub fn update_settings(&mut self, new_settings: OrderBySettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");
        self.apply(new_settings)
    }

    fn apply(&mut self, settings: OrderBySettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &OrderBySettings {
        &self.current_settings
    }

    #[must_use]
    pub const fn config_dir(&self) -> Option<&PathBuf> {
        self.config_dir.as_ref()
    }
}
