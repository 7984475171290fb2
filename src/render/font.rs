//! Font measurement using cosmic-text.
//!
//! Shapes single lines with a cosmic-text `FontSystem` and reports their
//! pixel extent. Fonts come either from the system font database or from a
//! directory of TTF/OTF files shipped with the host.

use std::cell::RefCell;
use std::path::Path;

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, fontdb};

use crate::text::{TextExtent, TextMeasurer};
use crate::{Error, Result};

/// Line height for a font size, matching the label's vertical metrics.
pub fn line_height(font_size: u32) -> i32 {
    (font_size as f32 * 1.2).ceil() as i32
}

/// Text measurer backed by cosmic-text shaping.
///
/// Shaping needs `&mut FontSystem`; the system sits behind a `RefCell` so a
/// single measurer can be shared by every label on a screen.
pub struct FontMeasurer {
    font_system: RefCell<FontSystem>,
}

impl std::fmt::Debug for FontMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces = self.font_system.borrow().db().len();
        f.debug_struct("FontMeasurer").field("faces", &faces).finish()
    }
}

impl FontMeasurer {
    /// Measurer using every font installed on the system.
    pub fn with_system_fonts() -> Self {
        Self { font_system: RefCell::new(FontSystem::new()) }
    }

    /// Measurer using only the fonts found in `fonts_dir`.
    pub fn from_dir(fonts_dir: &Path) -> Result<Self> {
        std::fs::read_dir(fonts_dir).map_err(|source| Error::FontDir {
            path: fonts_dir.to_path_buf(),
            source,
        })?;

        let mut db = fontdb::Database::new();
        db.load_fonts_dir(fonts_dir);
        if db.is_empty() {
            return Err(Error::NoFonts(fonts_dir.to_path_buf()));
        }
        tracing::debug!("Loaded {} font faces from {}", db.len(), fonts_dir.display());

        let font_system = FontSystem::new_with_locale_and_db("en-US".to_string(), db);
        Ok(Self { font_system: RefCell::new(font_system) })
    }

    fn shaped_width(&self, text: &str, font_size: u32) -> f32 {
        let mut font_system = self.font_system.borrow_mut();
        let metrics = Metrics::new(font_size as f32, line_height(font_size) as f32);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        // Unbounded width: a single line never wraps.
        buffer.set_size(&mut font_system, None, None);
        buffer.set_text(&mut font_system, text, &Attrs::new(), Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut font_system, true);

        buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0_f32, f32::max)
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&self, text: &str, font_size: u32) -> TextExtent {
        if text.is_empty() || font_size == 0 {
            return TextExtent::default();
        }
        TextExtent {
            width: self.shaped_width(text, font_size).ceil() as i32,
            height: line_height(font_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_height_rounds_up() {
        assert_eq!(line_height(22), 27);
        assert_eq!(line_height(10), 12);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let err = FontMeasurer::from_dir(Path::new("/nonexistent/fonts")).unwrap_err();
        assert!(matches!(err, Error::FontDir { .. }), "got {err:?}");
    }

    #[test]
    fn dir_without_fonts_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.txt"), "not a font").unwrap();
        let err = FontMeasurer::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NoFonts(_)), "got {err:?}");
    }

    #[test]
    fn system_font_widths_grow_with_prefix() {
        // Hosts without fonts shape everything to width 0, which still
        // satisfies the ordering.
        let m = FontMeasurer::with_system_fonts();
        let text = "Localized label";
        let mut previous = 0;
        for end in 1..=text.len() {
            let extent = m.measure(&text[..end], 22);
            assert!(extent.width >= previous, "prefix {:?}", &text[..end]);
            assert_eq!(extent.height, 27);
            previous = extent.width;
        }
        assert_eq!(m.measure("", 22), TextExtent::default());
    }
}
