//! Text measurement collaborator.

/// Rendered size of a single line of text, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
}

/// Measures single-line text at a font size.
///
/// Width must be monotonically non-decreasing in prefix length for a
/// normalized string; prefix fitting relies on it.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: u32) -> TextExtent;
}

/// Measurer where every character has the same advance.
///
/// Used when no font is available and in tests, where exact pixel arithmetic
/// matters. The requested font size is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAdvanceMeasurer {
    pub advance: i32,
    pub line_height: i32,
}

impl FixedAdvanceMeasurer {
    pub fn new(advance: i32, line_height: i32) -> Self {
        Self { advance, line_height }
    }

    /// Approximate a proportional font of `font_size` pixels.
    pub fn for_font_size(font_size: u32) -> Self {
        let size = font_size as f32;
        Self {
            advance: (size * 0.6).ceil() as i32,
            line_height: (size * 1.2).ceil() as i32,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, _font_size: u32) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        TextExtent {
            width: chars.saturating_mul(self.advance),
            height: self.line_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        let m = FixedAdvanceMeasurer::new(10, 20);
        assert_eq!(m.measure("abc", 22), TextExtent { width: 30, height: 20 });
        assert_eq!(m.measure("äöü", 22).width, 30);
        assert_eq!(m.measure("", 22), TextExtent::default());
    }

    #[test]
    fn derived_from_font_size() {
        let m = FixedAdvanceMeasurer::for_font_size(22);
        assert_eq!(m.advance, 14);
        assert_eq!(m.line_height, 27);
    }
}
