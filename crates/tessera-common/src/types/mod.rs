mod color;
mod core;

pub use self::color::Color;
pub use self::core::{PaneId, Rect};
