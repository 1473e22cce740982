use std::sync::Arc;

use tessera_common::{PaneId, Rect, TesseraError};
use tracing::debug;
use wry::raw_window_handle;
use wry::{WebContext, WebViewBuilder};

use super::handle::{rect_to_wry, WebViewHandle};
use super::types::PaneWebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a pane WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView gets its own storage context rooted at
    /// `config.data_directory` and is positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        pane_id: PaneId,
        window: &W,
        bounds: Rect,
        config: PaneWebViewConfig,
    ) -> Result<WebViewHandle, TesseraError> {
        let mut context = WebContext::new(config.data_directory.clone());

        let webview = {
            let mut builder = WebViewBuilder::with_web_context(&mut context)
                .with_bounds(rect_to_wry(bounds))
                .with_visible(config.visible)
                .with_background_color(config.background.to_tuple())
                .with_devtools(config.devtools)
                .with_focused(false);

            if let Some(ua) = &config.user_agent {
                builder = builder.with_user_agent(ua);
            }

            builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), pane_id);
            builder = self.attach_new_window_handler(builder, pane_id);

            builder
                .with_url(&config.url)
                .build_as_child(window)
                .map_err(|e| TesseraError::WebView(e.to_string()))?
        };

        debug!(%pane_id, url = %config.url, partition = %config.partition, "WebView created");

        Ok(WebViewHandle {
            webview,
            _context: context,
            pane_id,
            partition: config.partition,
        })
    }
}
