//! Longest-prefix fitting of a single line into a pixel box.

use super::TextMeasurer;

/// Result of fitting a line into a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit<'a> {
    /// Text to show while idle: the whole line, or its longest fitting prefix.
    pub clipped: &'a str,
    /// The full line is wider or taller than the box.
    pub overflowing: bool,
}

/// Fit `text` into a `width` x `height` box.
///
/// Non-positive dimensions disable fitting and return the text unchanged. On
/// overflow, binary-searches the longest prefix (counted in characters) whose
/// width fits; height is not re-checked for prefixes. An empty prefix is a
/// valid answer.
pub fn fit_single_line<'a>(
    measurer: &dyn TextMeasurer,
    font_size: u32,
    text: &'a str,
    width: i32,
    height: i32,
) -> Fit<'a> {
    if width <= 0 || height <= 0 {
        return Fit { clipped: text, overflowing: false };
    }

    let full = measurer.measure(text, font_size);
    if full.width <= width && full.height <= height {
        return Fit { clipped: text, overflowing: false };
    }

    // Byte offset of every character boundary, including the end.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let fits = |chars: usize| {
        measurer.measure(prefix(text, &boundaries, chars), font_size).width <= width
    };

    // Largest prefix length in [0, n] that fits.
    let mut lo = 0usize;
    let mut hi = boundaries.len();
    let mut best = 0usize;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if fits(mid) {
            best = mid;
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    tracing::trace!(chars = best, width, "clipped overflowing text");
    Fit { clipped: prefix(text, &boundaries, best), overflowing: true }
}

fn prefix<'a>(text: &'a str, boundaries: &[usize], chars: usize) -> &'a str {
    &text[..boundaries[chars]]
}
