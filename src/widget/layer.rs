//! Layer - a single drawable element in a scene.

use super::{ClipLink, next_layer_id};
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a layer. The creating component keeps one to mutate the
/// layer every frame; the scene keeps another to draw it.
pub type LayerRef = Rc<RefCell<Layer>>;

/// RGBA color value, 8 bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// What a layer draws.
#[derive(Debug, Clone)]
pub enum LayerKind {
    /// Single line of `text` with its top-left corner at (x, y).
    Text,
    /// Filled rectangle.
    Rect,
    /// Starts clipping to the linked region, if it is enabled.
    ClipBegin(ClipLink),
    /// Ends any active clip.
    ClipEnd,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Rect => "Rect",
            Self::ClipBegin(_) => "ClipBegin",
            Self::ClipEnd => "ClipEnd",
        }
    }
}

/// A drawable element.
#[derive(Debug)]
pub struct Layer {
    /// Unique layer ID.
    pub id: u64,
    pub kind: LayerKind,
    /// Debug name (optional).
    pub name: Option<String>,
    pub x: i32,
    pub y: i32,
    /// Width in pixels (rectangles only).
    pub width: i32,
    /// Height in pixels (rectangles only).
    pub height: i32,
    pub visible: bool,
    /// Fill color for rectangles, glyph color for text.
    pub color: Color,
    /// Text content (text layers only).
    pub text: String,
    pub font_size: u32,
}

impl Layer {
    pub fn new(kind: LayerKind, name: Option<&str>) -> Self {
        Self {
            id: next_layer_id(),
            kind,
            name: name.map(str::to_string),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            visible: true,
            color: Color::TRANSPARENT,
            text: String::new(),
            font_size: 0,
        }
    }

    pub fn text(name: &str, font_size: u32, color: Color) -> Self {
        Self {
            color,
            font_size,
            ..Self::new(LayerKind::Text, Some(name))
        }
    }

    pub fn rect(name: &str, color: Color) -> Self {
        Self {
            color,
            ..Self::new(LayerKind::Rect, Some(name))
        }
    }

    pub fn into_ref(self) -> LayerRef {
        Rc::new(RefCell::new(self))
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Color::from_hex("#000000FF").unwrap(), Color::BLACK);
        assert_eq!(Color::from_hex("ff8000").unwrap(), Color::rgba(255, 128, 0, 255));
        assert_eq!(Color::from_hex("#10203040").unwrap(), Color::rgba(16, 32, 48, 64));
    }

    #[test]
    fn rejects_bad_hex() {
        for bad in ["", "#12345", "#GG0000", "#1234567", "#ééé"] {
            assert!(Color::from_hex(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn layers_get_unique_ids() {
        let a = Layer::rect("a", Color::BLACK);
        let b = Layer::text("b", 22, Color::WHITE);
        assert_ne!(a.id, b.id);
        assert!(a.visible && b.visible);
        assert_eq!(b.font_size, 22);
    }
}
