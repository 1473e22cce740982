use std::path::PathBuf;

use tessera_common::Color;

/// Configuration for one pane's webview.
#[derive(Debug, Clone)]
pub struct PaneWebViewConfig {
    /// URL to navigate to on creation.
    pub url: String,
    /// Storage partition key, for logging.
    pub partition: String,
    /// Directory holding this pane's persistent storage.
    pub data_directory: Option<PathBuf>,
    /// User agent sent by this pane. `None` keeps the engine default.
    pub user_agent: Option<String>,
    /// Painted before the first page renders.
    pub background: Color,
    pub devtools: bool,
    /// Panes start hidden and are shown once their first load finishes.
    pub visible: bool,
}

