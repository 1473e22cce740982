mod calculation;
mod types;

#[cfg(test)]
mod tests;

pub use calculation::{columns, five_pane, grid, tower};
pub use types::*;

use tessera_common::Rect;

/// Compute one rectangle per pane for a `width` x `height` container.
///
/// Rectangles come back in pane order. Degenerate containers yield
/// zero-area rectangles, never an error.
pub fn compute_layout(count: usize, width: u32, height: u32) -> Vec<Rect> {
    match LayoutKind::for_count(count) {
        LayoutKind::Empty => Vec::new(),
        LayoutKind::Columns => columns(count, width, height),
        LayoutKind::Tower => tower(width, height),
        LayoutKind::FivePane => five_pane(width, height),
        LayoutKind::Grid => grid(count, width, height),
    }
}
