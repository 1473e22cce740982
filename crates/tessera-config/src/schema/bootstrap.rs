//! Bootstrap collaborator settings: user agent discovery and dark-mode script.

use serde::{Deserialize, Serialize};

/// Where and how the shared user agent and dark-mode script are fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Page listing current browser user agents.
    pub user_agent_url: String,
    /// CSS selector for elements holding one user agent each.
    pub user_agent_selector: String,
    /// Substring a candidate must contain to be selected.
    pub user_agent_marker: String,
    /// Fixed user agent. When set, no listing page is fetched.
    pub user_agent: Option<String>,
    /// Script implementing a global dark-mode toggle.
    pub dark_script_url: String,
    /// Call appended to the fetched script to switch dark mode on.
    pub dark_activation: String,
    /// Connect timeout in seconds (valid range: 1-300).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (valid range: 1-300).
    pub timeout_secs: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            user_agent_url: "https://useragents.me".into(),
            user_agent_selector: ".ua-textarea".into(),
            user_agent_marker: "Chrome".into(),
            user_agent: None,
            dark_script_url: "https://unpkg.com/darkreader/darkreader.js".into(),
            dark_activation: "DarkReader.enable();".into(),
            connect_timeout_secs: 10,
            timeout_secs: 30,
        }
    }
}
