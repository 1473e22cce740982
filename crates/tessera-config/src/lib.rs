//! Tessera configuration system.
//!
//! TOML-based configuration covering the bootstrap collaborators (user
//! agent listing, dark-mode script), pane theming, and the main window.
//! All sections use `serde(default)` so partial configs work.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    BootstrapConfig, LogLevel, LoggingConfig, TesseraConfig, ThemeConfig, WindowConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use tessera_common::ConfigError;

/// Load config from the platform default path, creating it if missing,
/// and validate the result.
pub fn load_config() -> Result<TesseraConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<TesseraConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TesseraConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
