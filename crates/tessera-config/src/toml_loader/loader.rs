//! Reading a config file into `TesseraConfig`.

use std::io::ErrorKind;
use std::path::Path;

use tessera_common::ConfigError;
use tracing::info;

use super::paths::{create_default_config, default_config_path};
use crate::schema::TesseraConfig;

/// Parse the TOML file at `path`. Missing fields take their defaults;
/// validation is left to the caller.
pub fn load_from_path(path: &Path) -> Result<TesseraConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("cannot read {}: {e}", path.display())),
    })?;

    let config = toml::from_str::<TesseraConfig>(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load the platform config file, writing the template first if there is none.
pub fn load_default() -> Result<TesseraConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    create_default_config(&path)?;
    Ok(TesseraConfig::default())
}
