//! Main window configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Open borderless fullscreen on the current monitor.
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tessera".into(),
            fullscreen: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_partial_toml() {
        let config: WindowConfig = toml::from_str(r#"title = "Wall""#).unwrap();
        assert_eq!(config.title, "Wall");
        assert!(config.fullscreen);
    }
}
