use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("external browser error: {0}")]
    BrowserError(String),
}

/// Failures of the pre-window bootstrap. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("fetch of {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("fetch of {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("no user agent containing '{marker}' found at {url}")]
    NoUserAgent { url: String, marker: String },

    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TesseraError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}
