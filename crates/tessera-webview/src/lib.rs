//! WebView bridge for Tessera panes.
//!
//! Wraps the `wry` crate to provide:
//! - One isolated browsing context per pane, keyed by a storage partition
//! - Outbound-link redirection to the system browser
//! - A page-load event queue drained by the main event loop
//! - The `PaneSurface` seam the layout controller drives

pub mod events;
pub mod manager;
pub mod partition;
pub mod surface;

pub use events::{PageLoadState, WebViewEvent};
pub use manager::{PaneWebViewConfig, WebViewHandle, WebViewManager};
pub use partition::StoragePartition;
pub use surface::PaneSurface;
