//! Graceful shutdown: destroy pane webviews, then release the window.

use super::core::TesseraApp;

impl TesseraApp {
    /// Tear down panes before the window so each webview is dropped while
    /// its parent still exists.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut layout) = self.layout.take() {
            layout.close_all();
        }
        let pending = self.webviews.drain_events().len();
        if pending > 0 {
            tracing::debug!(pending, "discarded pending webview events");
        }

        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
