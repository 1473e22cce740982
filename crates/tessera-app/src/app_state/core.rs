//! TesseraApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use tessera_webview::{WebViewHandle, WebViewManager};

use crate::boot::ResolvedBootstrap;
use crate::panes::LayoutController;
use crate::state::AppState;

/// Top-level application state.
pub struct TesseraApp {
    pub(super) state: AppState,
    pub(super) bootstrap: ResolvedBootstrap,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Pane webviews and their layout
    pub(super) webviews: WebViewManager,
    pub(super) layout: Option<LayoutController<WebViewHandle>>,

    // Event loop
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl TesseraApp {
    /// Build the app from startup state and a completed bootstrap.
    pub fn new(state: AppState, bootstrap: ResolvedBootstrap) -> Self {
        Self {
            state,
            bootstrap,
            window: None,
            webviews: WebViewManager::new(),
            layout: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
