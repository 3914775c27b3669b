//! `.order-by.json` settings: loading, validation and conversion into a
//! [`TranslationConfig`](crate::TranslationConfig).
mod loader;
mod manager;
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_dir,
    load_from_file,
};
pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    OrderBySettings,
    ValidationError,
};
