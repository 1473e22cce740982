//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::TesseraConfig;
use std::path::Path;

#[test]
fn load_from_nonexistent_is_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tessera_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, tessera_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[bootstrap]
user_agent_marker = "Edg"

[theme]
dark_background = "#000000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.bootstrap.user_agent_marker, "Edg");
    assert_eq!(config.theme.dark_background, "#000000");
    // Defaults preserved
    assert_eq!(config.theme.light_background, "#f0f0f0");
    assert_eq!(config.bootstrap.user_agent_selector, ".ua-textarea");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, tessera_common::ConfigError::ParseError(_)));
}

#[test]
fn create_default_config_writes_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tessera").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, TesseraConfig::default().window.title);
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[window]\ntitle = \"Mine\"\n").unwrap();

    create_default_config(&path).unwrap();
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Mine");
}

#[test]
fn template_parses_to_defaults() {
    let config: TesseraConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.bootstrap.dark_activation, "DarkReader.enable();");
    assert!(config.bootstrap.user_agent.is_none());
}

#[test]
fn default_config_path_ends_with_tessera_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("tessera/config.toml"));
    }
}
