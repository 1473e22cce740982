//! Pane and window theming.

use serde::{Deserialize, Serialize};

/// Background colors and the dark-mode request marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Background for light panes (`#rrggbb`).
    pub light_background: String,
    /// Background for dark panes (`#rrggbb`).
    pub dark_background: String,
    /// Leading character that marks an address for dark rendering.
    pub dark_marker: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light_background: "#f0f0f0".into(),
            dark_background: "#121212".into(),
            dark_marker: "^".into(),
        }
    }
}

impl ThemeConfig {
    /// The marker as a single character, falling back to `^`.
    pub fn marker_char(&self) -> char {
        let mut chars = self.dark_marker.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => tessera_common::DEFAULT_DARK_MARKER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.light_background, "#f0f0f0");
        assert_eq!(theme.dark_background, "#121212");
        assert_eq!(theme.marker_char(), '^');
    }

    #[test]
    fn marker_char_falls_back_on_bad_marker() {
        let mut theme = ThemeConfig::default();
        theme.dark_marker = "!".into();
        assert_eq!(theme.marker_char(), '!');
        theme.dark_marker = "!!".into();
        assert_eq!(theme.marker_char(), '^');
        theme.dark_marker = String::new();
        assert_eq!(theme.marker_char(), '^');
    }
}
