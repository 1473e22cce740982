//! Pane construction and layout.
//!
//! `PaneFactory` turns addresses into pane descriptors (partition, user agent,
//! theming, dark-mode script). `LayoutController` owns the resulting panes
//! and applies tiling passes and first-load compositing to them.

mod controller;
mod factory;
mod pane;

pub use controller::LayoutController;
pub use factory::{PaneFactory, PaneDescriptor};
pub use pane::Pane;
