use std::sync::{Arc, Mutex};

use tessera_common::PaneId;
use tessera_platform::ExternalBrowser;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

/// Send a window-open request to the external browser and record it.
///
/// Always returns `false`: no second in-app context is ever created.
pub fn redirect_outbound(
    browser: &dyn ExternalBrowser,
    events: &Mutex<Vec<WebViewEvent>>,
    pane_id: PaneId,
    url: String,
) -> bool {
    if let Err(e) = browser.open(&url) {
        warn!(%pane_id, url = %url, error = %e, "failed to open outbound link");
    }
    if let Ok(mut evts) = events.lock() {
        evts.push(WebViewEvent::OutboundLink { pane_id, url });
    }
    false
}

impl WebViewManager {
    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pane_id: PaneId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%pane_id, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad {
                    pane_id,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_new_window_handler<'a>(
        &self,
        builder: WebViewBuilder<'a>,
        pane_id: PaneId,
    ) -> WebViewBuilder<'a> {
        let browser = Arc::clone(&self.browser);
        let events = Arc::clone(&self.events);
        builder.with_new_window_req_handler(move |url| {
            redirect_outbound(browser.as_ref(), &events, pane_id, url)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_common::PlatformError;

    #[derive(Default)]
    struct RecordingBrowser {
        opened: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ExternalBrowser for RecordingBrowser {
        fn open(&self, url: &str) -> Result<(), PlatformError> {
            self.opened.lock().unwrap().push(url.to_string());
            if self.fail {
                Err(PlatformError::BrowserError("no browser".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn outbound_link_goes_to_external_browser() {
        let browser = RecordingBrowser::default();
        let events = Mutex::new(Vec::new());

        let allowed = redirect_outbound(
            &browser,
            &events,
            PaneId(1),
            "https://example.com/popup".into(),
        );

        assert!(!allowed);
        assert_eq!(
            *browser.opened.lock().unwrap(),
            vec!["https://example.com/popup".to_string()]
        );
        assert_eq!(
            *events.lock().unwrap(),
            vec![WebViewEvent::OutboundLink {
                pane_id: PaneId(1),
                url: "https://example.com/popup".into(),
            }]
        );
    }

    #[test]
    fn browser_failure_still_denies_new_window() {
        let browser = RecordingBrowser {
            fail: true,
            ..Default::default()
        };
        let events = Mutex::new(Vec::new());

        assert!(!redirect_outbound(&browser, &events, PaneId(0), "https://x.io".into()));
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn drain_events_empties_queue() {
        let manager = WebViewManager::with_browser(Arc::new(RecordingBrowser::default()));
        redirect_outbound(
            manager.browser.as_ref(),
            &manager.events,
            PaneId(2),
            "https://x.io".into(),
        );
        let drained = manager.drain_events();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].pane_id(), PaneId(2));
        assert!(manager.drain_events().is_empty());
    }
}
