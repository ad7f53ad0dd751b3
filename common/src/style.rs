//! Visual style of a panel.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::PixelColor;

/// Colors, font and text tuning for one panel.
///
/// The two offsets only affect text layout:
/// - `line_height_offset` is added to the font's line height when stacking
///   several lines. Lines too far apart want a negative value.
/// - `vertical_offset` shifts all text up (negative) or down (positive).
#[derive(Clone, Copy)]
pub struct PanelStyle<'a, C> {
    /// Background fill.
    pub color: C,
    /// Text color, also used for the outline.
    pub text_color: C,
    /// Draw a one pixel outline in `text_color`.
    pub outline: bool,
    /// Font for text content. Text is not drawn without one.
    pub font: Option<&'a MonoFont<'a>>,
    pub line_height_offset: i32,
    pub vertical_offset: i32,
}

impl<'a, C> PanelStyle<'a, C>
where
    C: PixelColor,
{
    /// Style with the given colors, no font, no outline and no offsets.
    pub const fn new(
        color: C,
        text_color: C,
    ) -> Self {
        Self {
            color,
            text_color,
            outline: false,
            font: None,
            line_height_offset: 0,
            vertical_offset: 0,
        }
    }

    #[must_use]
    pub fn with_font(
        mut self,
        font: &'a MonoFont<'a>,
    ) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn with_outline(
        mut self,
        outline: bool,
    ) -> Self {
        self.outline = outline;
        self
    }

    #[must_use]
    pub fn with_line_height_offset(
        mut self,
        offset: i32,
    ) -> Self {
        self.line_height_offset = offset;
        self
    }

    #[must_use]
    pub fn with_vertical_offset(
        mut self,
        offset: i32,
    ) -> Self {
        self.vertical_offset = offset;
        self
    }
}
