use tessera_common::{PaneId, Rect, TesseraError};
use tessera_webview::PaneSurface;
use tracing::{debug, info, warn};

use super::factory::PaneDescriptor;

/// A live pane: what it shows, the surface showing it, and compositing state.
pub struct Pane<S> {
    desc: PaneDescriptor,
    surface: S,
    bounds: Rect,
    /// Flips to true on the first successful composite and never back.
    attached: bool,
    devtools: bool,
}

impl<S: PaneSurface> Pane<S> {
    pub fn new(desc: PaneDescriptor, surface: S, devtools: bool) -> Self {
        Self {
            desc,
            surface,
            bounds: Rect::default(),
            attached: false,
            devtools,
        }
    }

    pub fn id(&self) -> PaneId {
        self.desc.pane_id
    }

    pub fn descriptor(&self) -> &PaneDescriptor {
        &self.desc
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub(super) fn apply_bounds(&mut self, rect: Rect) {
        self.bounds = rect;
        if let Err(e) = self.surface.set_bounds(rect) {
            warn!(pane_id = %self.id(), error = %e, "failed to update pane bounds");
        }
    }

    /// Handle a finished navigation.
    ///
    /// Re-injects the dark-mode script on every load, then composites the
    /// pane if it is not already visible. Returns whether this call attached it.
    pub(super) fn on_navigation_finished(&mut self) -> bool {
        if let Some(script) = &self.desc.dark_script {
            if let Err(e) = self.surface.evaluate_script(script) {
                warn!(pane_id = %self.id(), error = %e, "dark-mode injection failed");
            }
        }

        if self.attached {
            debug!(pane_id = %self.id(), "pane already composited");
            return false;
        }

        match self.attach() {
            Ok(()) => true,
            Err(e) => {
                warn!(pane_id = %self.id(), error = %e, "failed to composite pane");
                false
            }
        }
    }

    fn attach(&mut self) -> Result<(), TesseraError> {
        self.surface.set_visible(true)?;
        self.attached = true;
        if self.devtools {
            info!(partition = %self.desc.partition, "opening devtools");
            self.surface.open_devtools();
        }
        Ok(())
    }
}
