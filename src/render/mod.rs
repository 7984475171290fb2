//! Rendering side of the scene host: geometry, the draw pass and font
//! measurement.

pub mod draw;
pub mod font;

pub use draw::{DrawCommand, build_draw_list};
pub use font::FontMeasurer;

/// Pixel rectangle. Width and height may be zero or negative, which callers
/// treat as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl LayoutRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
