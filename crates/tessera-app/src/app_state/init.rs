//! Window creation and pane webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Theme, WindowAttributes};

use tessera_tiling::compute_layout;

use crate::panes::{LayoutController, Pane, PaneFactory};

use super::core::TesseraApp;

impl TesseraApp {
    /// Create the main window.
    /// Returns `false` if creation failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.state.config.window;
        let theme = if self.state.wants_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };

        let mut attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_theme(Some(theme));
        if window_config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        match event_loop.create_window(attrs) {
            Ok(w) => {
                tracing::info!(?theme, fullscreen = window_config.fullscreen, "window created");
                self.window = Some(Arc::new(w));
                true
            }
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                false
            }
        }
    }

    /// Create one hidden webview per address, in address order.
    /// Returns `false` if any pane could not be created.
    pub(super) fn spawn_panes(&mut self) -> bool {
        let Some(window) = self.window.clone() else {
            return false;
        };
        let size = window.inner_size();

        let mut factory = PaneFactory::new(
            &self.state.identity,
            &self.bootstrap,
            &self.state.config.theme,
            self.state.devtools,
        );
        match tessera_platform::partitions_dir() {
            Ok(root) => factory = factory.with_partitions_root(root),
            Err(e) => tracing::warn!("No partition storage root, using engine default: {e}"),
        }

        let descs = factory.describe_all(&self.state.addresses);
        let rects = compute_layout(descs.len(), size.width, size.height);
        let mut panes = Vec::with_capacity(descs.len());

        for (desc, rect) in descs.into_iter().zip(rects) {
            let config = factory.webview_config(&desc);
            if let Some(dir) = &config.data_directory {
                if let Err(e) = tessera_platform::ensure_dir(dir) {
                    tracing::error!(partition = %desc.partition, "Failed to create partition storage: {e}");
                    return false;
                }
            }

            match self.webviews.create(desc.pane_id, window.as_ref(), rect, config) {
                Ok(handle) => {
                    tracing::info!(
                        pane_id = %handle.pane_id(),
                        url = %desc.url,
                        dark = desc.dark(),
                        partition = handle.partition(),
                        "spawned partition"
                    );
                    panes.push(Pane::new(desc, handle, self.state.devtools));
                }
                Err(e) => {
                    tracing::error!(pane_id = %desc.pane_id, url = %desc.url, "Failed to create pane: {e}");
                    return false;
                }
            }
        }

        self.layout = Some(LayoutController::new(panes));
        true
    }
}
