//! Pixel arithmetic for each arrangement.
//!
//! All rounding lives here. Widths and heights are floored; the tower and
//! five-pane centers take whatever the side columns leave so those layouts
//! span the full width exactly.

use tessera_common::Rect;

use super::types::SLAVE_FACTOR;

/// Width of each side column in tower-style layouts.
pub(crate) fn side_width(width: u32) -> u32 {
    (f64::from(width) / 3.0 * SLAVE_FACTOR).floor() as u32
}

/// `count` equal full-height columns, left to right.
pub fn columns(count: usize, width: u32, height: u32) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let w = width / count as u32;
    (0..count as u32)
        .map(|i| Rect::new(i * w, 0, w, height))
        .collect()
}

/// Three full-height columns: narrow left, wide center, narrow right.
pub fn tower(width: u32, height: u32) -> Vec<Rect> {
    let side = side_width(width);
    let center = width - 2 * side;
    vec![
        Rect::new(0, 0, side, height),
        Rect::new(side, 0, center, height),
        Rect::new(side + center, 0, side, height),
    ]
}

/// Order: top-left, bottom-left, center, top-right, bottom-right.
pub fn five_pane(width: u32, height: u32) -> Vec<Rect> {
    let side = side_width(width);
    let center = width - 2 * side;
    let half = height / 2;
    let right = side + center;
    vec![
        Rect::new(0, 0, side, half),
        Rect::new(0, half, side, half),
        Rect::new(side, 0, center, height),
        Rect::new(right, 0, side, half),
        Rect::new(right, half, side, half),
    ]
}

/// Two-row grid. Pane `k` sits in the top row while `k < ceil(n/2)`, the
/// rest fill the bottom row left to right, so every pane gets a cell.
pub fn grid(count: usize, width: u32, height: u32) -> Vec<Rect> {
    const ROWS: usize = 2;
    if count == 0 {
        return Vec::new();
    }
    let top_columns = count.div_ceil(ROWS);
    let bottom_columns = count / ROWS;
    let cell_height = height / ROWS as u32;

    let mut rects = Vec::with_capacity(count);
    for (row, cols) in [top_columns, bottom_columns].into_iter().enumerate() {
        if cols == 0 {
            continue;
        }
        let cell_width = width / cols as u32;
        let y = row as u32 * cell_height;
        for col in 0..cols as u32 {
            rects.push(Rect::new(col * cell_width, y, cell_width, cell_height));
        }
    }
    rects
}
