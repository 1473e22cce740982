//! WebView event types.

use serde::{Deserialize, Serialize};
use tessera_common::PaneId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by pane webviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        pane_id: PaneId,
        state: PageLoadState,
        url: String,
    },
    /// The page tried to open a new window; the URL went to the system browser.
    OutboundLink { pane_id: PaneId, url: String },
}

impl WebViewEvent {
    pub fn pane_id(&self) -> PaneId {
        match self {
            Self::PageLoad { pane_id, .. } | Self::OutboundLink { pane_id, .. } => *pane_id,
        }
    }
}
