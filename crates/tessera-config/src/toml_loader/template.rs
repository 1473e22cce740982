//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tessera Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[bootstrap]
# user_agent_url = "https://useragents.me"
# user_agent_selector = ".ua-textarea"
# user_agent_marker = "Chrome"
# user_agent = "Mozilla/5.0 ..."   # fixed value, skips the listing fetch
# dark_script_url = "https://unpkg.com/darkreader/darkreader.js"
# dark_activation = "DarkReader.enable();"
# connect_timeout_secs = 10        # 1-300
# timeout_secs = 30                # 1-300

[theme]
# light_background = "#f0f0f0"
# dark_background = "#121212"
# dark_marker = "^"

[window]
# title = "Tessera"
# fullscreen = true

[logging]
# level = "info"                   # trace, debug, info, warn, error
"##
    .to_string()
}
