use tessera_common::{PaneId, Rect};
use tessera_tiling::TilingEngine;
use tessera_webview::PaneSurface;
use tracing::{debug, info};

use super::pane::Pane;

/// Owns the panes of the main window and keeps them tiled.
pub struct LayoutController<S> {
    panes: Vec<Pane<S>>,
    engine: TilingEngine,
    size: (u32, u32),
    /// Set once the window reports it is ready to show.
    shown: bool,
}

impl<S: PaneSurface> LayoutController<S> {
    pub fn new(panes: Vec<Pane<S>>) -> Self {
        let engine = TilingEngine::new(panes.len());
        Self {
            panes,
            engine,
            size: (0, 0),
            shown: false,
        }
    }

    pub fn panes(&self) -> &[Pane<S>] {
        &self.panes
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn pane(&self, pane_id: PaneId) -> Option<&Pane<S>> {
        self.panes.iter().find(|p| p.id() == pane_id)
    }

    /// The window became showable: run the first layout pass.
    pub fn on_ready_to_show(&mut self, width: u32, height: u32) -> Vec<Rect> {
        self.shown = true;
        info!(width, height, panes = self.panes.len(), "window ready");
        self.layout_pass(width, height)
    }

    /// Re-tile on resize. Ignored until the window has been shown.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Option<Vec<Rect>> {
        if !self.shown {
            debug!(width, height, "resize before ready-to-show ignored");
            return None;
        }
        Some(self.layout_pass(width, height))
    }

    /// Forward a finished navigation to its pane. Returns whether the pane
    /// was composited by this event.
    pub fn on_navigation_finished(&mut self, pane_id: PaneId) -> bool {
        match self.panes.iter_mut().find(|p| p.id() == pane_id) {
            Some(pane) => {
                let attached = pane.on_navigation_finished();
                if attached {
                    info!(%pane_id, url = %pane.descriptor().url, "pane composited");
                }
                attached
            }
            None => {
                debug!(%pane_id, "navigation event for unknown pane");
                false
            }
        }
    }

    /// Drop every pane and its surface.
    pub fn close_all(&mut self) {
        let count = self.panes.len();
        self.panes.clear();
        self.engine = TilingEngine::new(0);
        info!(count, "closed all panes");
    }

    fn layout_pass(&mut self, width: u32, height: u32) -> Vec<Rect> {
        self.size = (width, height);
        let rects = self.engine.compute(width, height);
        for (pane, rect) in self.panes.iter_mut().zip(rects.iter()) {
            debug!(
                pane_id = %pane.id(),
                x = rect.x,
                y = rect.y,
                width = rect.width,
                height = rect.height,
                "layout"
            );
            pane.apply_bounds(*rect);
        }
        rects
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}
