//! Layout arrangement selection.

use serde::{Deserialize, Serialize};
use tessera_common::Rect;

/// Width ratio applied to side columns in tower-style layouts.
pub const SLAVE_FACTOR: f64 = 0.866_025_403_784_438_6; // sqrt(3) / 2

/// Arrangement used for a given pane count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// No panes.
    Empty,
    /// One or two equal full-height columns.
    Columns,
    /// Three columns with a wider center.
    Tower,
    /// Two stacked panes either side of a full-height center.
    FivePane,
    /// Two rows, `ceil(n/2)` columns on top and `floor(n/2)` below.
    Grid,
}

impl LayoutKind {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            1 | 2 => Self::Columns,
            3 => Self::Tower,
            5 => Self::FivePane,
            _ => Self::Grid,
        }
    }
}

/// Stateless tiling engine bound to a pane count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingEngine {
    pane_count: usize,
}

impl TilingEngine {
    pub fn new(pane_count: usize) -> Self {
        Self { pane_count }
    }

    pub fn pane_count(&self) -> usize {
        self.pane_count
    }

    pub fn kind(&self) -> LayoutKind {
        LayoutKind::for_count(self.pane_count)
    }

    pub fn compute(&self, width: u32, height: u32) -> Vec<Rect> {
        super::compute_layout(self.pane_count, width, height)
    }
}
