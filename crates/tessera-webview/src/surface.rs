//! The operations the layout controller needs from a pane's browsing context.

use tessera_common::{Rect, TesseraError};

pub trait PaneSurface {
    /// Position the pane within the main window.
    fn set_bounds(&self, rect: Rect) -> Result<(), TesseraError>;

    /// Add the pane to, or remove it from, the window's visible set.
    fn set_visible(&self, visible: bool) -> Result<(), TesseraError>;

    /// Run a script in the pane's current document.
    fn evaluate_script(&self, js: &str) -> Result<(), TesseraError>;

    fn open_devtools(&self);
}
