//! Polling of webview events between window events.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use tessera_webview::{PageLoadState, WebViewEvent};

use super::core::TesseraApp;
use super::types::POLL_INTERVAL;

impl TesseraApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::PageLoad {
                    pane_id,
                    state: PageLoadState::Finished,
                    url,
                } => {
                    tracing::debug!(%pane_id, url = %url, "navigation finished");
                    if let Some(layout) = self.layout.as_mut() {
                        layout.on_navigation_finished(pane_id);
                    }
                }
                WebViewEvent::PageLoad { .. } => {}
                WebViewEvent::OutboundLink { pane_id, url } => {
                    tracing::info!(%pane_id, url = %url, "outbound link sent to system browser");
                }
            }
        }
    }
}
