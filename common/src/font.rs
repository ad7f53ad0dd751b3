//! Glyph metrics for text layout.
//!
//! The multi-line layout only needs one number from the font: how tall a
//! rendered line is. It gets it by measuring [`REFERENCE_GLYPH`], a wide
//! capital letter that spans the full cell on every bundled font.

use embedded_graphics::mono_font::MonoFont;

/// Glyph measured to obtain the nominal line height.
pub const REFERENCE_GLYPH: &str = "M";

/// Result of measuring a string with a font.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct GlyphMetrics {
    /// Horizontal advance of the whole string in pixels.
    pub width: u32,
    /// Offset of the first glyph's ink from the pen position.
    pub x_offset: i32,
    /// Rendered height of the measured glyphs.
    pub text_height: u32,
    /// Distance between baselines of consecutive lines.
    pub line_height: u32,
}

/// Font metrics query.
pub trait FontMetrics {
    /// Measure `text` as it would be rendered on a single line.
    fn measure(
        &self,
        text: &str,
    ) -> GlyphMetrics;
}

/// Monospaced fonts have uniform cells, so the text height and the line
/// height are both the cell height and there is no ink offset.
impl FontMetrics for MonoFont<'_> {
    fn measure(
        &self,
        text: &str,
    ) -> GlyphMetrics {
        let glyphs = text.chars().count() as u32;
        let width = match glyphs {
            0 => 0,
            n => n
                .saturating_mul(self.character_size.width)
                .saturating_add((n - 1).saturating_mul(self.character_spacing)),
        };

        GlyphMetrics {
            width,
            x_offset: 0,
            text_height: self.character_size.height,
            line_height: self.character_size.height,
        }
    }
}
