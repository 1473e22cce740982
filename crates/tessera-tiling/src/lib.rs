//! Deterministic pane tiling.
//!
//! The arrangement is chosen from the pane count alone and every pass
//! recomputes all rectangles from the current container size.

pub mod layout;

pub use layout::{compute_layout, LayoutKind, TilingEngine, SLAVE_FACTOR};
