use tessera_common::{PaneId, Rect, TesseraError};
use wry::{WebContext, WebView};

use crate::surface::PaneSurface;

/// Handle to a managed pane WebView.
pub struct WebViewHandle {
    /// The underlying wry WebView. Declared before `context` so it drops first.
    pub(super) webview: WebView,
    /// Storage context backing the pane's partition.
    pub(super) _context: WebContext,
    pub(super) pane_id: PaneId,
    pub(super) partition: String,
}

impl WebViewHandle {
    pub fn pane_id(&self) -> PaneId {
        self.pane_id
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }
}

fn webview_err(e: wry::Error) -> TesseraError {
    TesseraError::WebView(e.to_string())
}

/// Convert a pane `Rect` (physical pixels) to a wry `Rect`.
pub fn rect_to_wry(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(
            rect.x as i32,
            rect.y as i32,
        )),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(rect.width, rect.height)),
    }
}

impl PaneSurface for WebViewHandle {
    fn set_bounds(&self, rect: Rect) -> Result<(), TesseraError> {
        self.webview.set_bounds(rect_to_wry(rect)).map_err(webview_err)
    }

    fn set_visible(&self, visible: bool) -> Result<(), TesseraError> {
        self.webview.set_visible(visible).map_err(webview_err)
    }

    fn evaluate_script(&self, js: &str) -> Result<(), TesseraError> {
        self.webview.evaluate_script(js).map_err(webview_err)
    }

    fn open_devtools(&self) {
        self.webview.open_devtools();
    }
}
