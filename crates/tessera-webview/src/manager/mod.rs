//! WebView lifecycle management.
//!
//! `WebViewManager` creates one `wry::WebView` per pane, each with its own
//! data directory, and collects their events for the main event loop.

use std::sync::{Arc, Mutex};

use tessera_platform::{ExternalBrowser, SystemBrowser};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::PaneWebViewConfig;

/// Creates pane webviews and owns their shared event sink.
pub struct WebViewManager {
    /// Event sink — events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Receiver of outbound links.
    browser: Arc<dyn ExternalBrowser>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self::with_browser(Arc::new(SystemBrowser))
    }

    pub fn with_browser(browser: Arc<dyn ExternalBrowser>) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            browser,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
