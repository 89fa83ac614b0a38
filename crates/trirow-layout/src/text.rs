//! Single-line text measurement with ellipsis truncation.
//!
//! Widths are counted in display cells (East Asian Width aware, one
//! grapheme cluster at a time) and scaled by a fixed per-cell advance.
//! This is a deterministic stand-in for real font metrics; hosts with a
//! shaping engine implement [`crate::Measure`] themselves.

use trirow_core::ConfigError;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "…";

/// Text measurement configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextStyle {
    /// Horizontal advance of one display cell in pixels
    pub advance: u32,
    /// Height of one line in pixels
    pub line_height: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            advance: 8,
            line_height: 20,
        }
    }
}

impl TextStyle {
    pub fn new(advance: u32, line_height: u32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    /// Reject styles that cannot produce meaningful measurements.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.advance == 0 {
            return Err(ConfigError::InvalidTextStyle {
                reason: "advance must be at least 1px".to_string(),
            });
        }
        if self.line_height == 0 {
            return Err(ConfigError::InvalidTextStyle {
                reason: "line_height must be at least 1px".to_string(),
            });
        }
        Ok(())
    }

    fn cells_to_px(&self, cells: usize) -> u32 {
        let px = cells as u64 * self.advance as u64;
        u32::try_from(px).unwrap_or(u32::MAX)
    }
}

/// Measured single-line text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextMetrics {
    /// Rendered width in pixels
    pub width: u32,
    /// Rendered height in pixels
    pub height: u32,
    /// Whether the text was cut and suffixed with an ellipsis
    pub truncated: bool,
    /// The text as it would be drawn
    pub rendered: String,
}

/// Display width of a string in cells.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(|g| g.width()).sum()
}

/// Measure a single line of text, truncating to `max_width` pixels.
///
/// Text never wraps. When it does not fit it is cut at a grapheme boundary
/// and [`ELLIPSIS`] is appended. If not even the ellipsis fits, nothing is
/// rendered and the width is zero.
pub fn measure_text(text: &str, style: &TextStyle, max_width: Option<u32>) -> TextMetrics {
    let natural = style.cells_to_px(display_width(text));

    let fits = match max_width {
        Some(max_w) => natural <= max_w,
        None => true,
    };
    if fits {
        return TextMetrics {
            width: natural,
            height: style.line_height,
            truncated: false,
            rendered: text.to_string(),
        };
    }

    // `fits` is only false with a bound and a non-zero advance.
    let max_cells = match max_width {
        Some(max_w) if style.advance > 0 => (max_w / style.advance) as usize,
        _ => 0,
    };
    let rendered = truncate_text(text, max_cells, ELLIPSIS);

    TextMetrics {
        width: style.cells_to_px(display_width(&rendered)),
        height: style.line_height,
        truncated: true,
        rendered,
    }
}

/// Truncate text to fit within `max_cells` display cells.
///
/// If the text is wider than `max_cells`, it is cut at a grapheme boundary
/// and `suffix` is appended, with the suffix width accounted for. A suffix
/// that is itself too wide is cut instead.
pub fn truncate_text(text: &str, max_cells: usize, suffix: &str) -> String {
    if max_cells == 0 {
        return String::new();
    }

    if display_width(text) <= max_cells {
        return text.to_string();
    }

    let suffix_width = display_width(suffix);
    if suffix_width >= max_cells {
        return take_cells(suffix, max_cells);
    }

    let mut result = take_cells(text, max_cells - suffix_width);
    result.push_str(suffix);
    result
}

/// Longest grapheme-aligned prefix of `text` that fits in `max_cells`.
fn take_cells(text: &str, max_cells: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut current: usize = 0;

    for grapheme in text.graphemes(true) {
        let gw = grapheme.width();
        if current + gw > max_cells {
            break;
        }
        result.push_str(grapheme);
        current += gw;
    }

    result
}
