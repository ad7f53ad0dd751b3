//! The panel entity.
//!
//! A panel is a fixed rectangle with a style, content, and two flags:
//!
//! | Flag        | Drawn | Hit-tested |
//! |-------------|-------|------------|
//! | `enabled`   | yes   | yes        |
//! | `touchable` | -     | yes        |
//!
//! Geometry is fixed at construction. `max_x` and `max_y` are derived then
//! and used as inclusive bounds by [`Panel::is_touch_on_panel`]. A panel with
//! zero width or height is valid and never draws anything.
//!
//! # Draw Passes
//!
//! Drawing is split into [`Panel::draw_background`] and
//! [`Panel::draw_content`] so a layer can paint every background before any
//! content (see [`crate::layer`]). [`Panel::draw`] runs both for one panel.

use embedded_graphics::image::ImageDrawable;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{trace, warn};

use crate::content::{self, Content, Label, TextLine, TextLines};
use crate::layout;
use crate::style::PanelStyle;
use crate::surface::{Surface, TextAnchor};

/// A rectangular region with centered text or an image.
///
/// `C` is the display color, `I` the image type. Fonts and images are
/// borrowed for `'a` and must outlive the panel.
pub struct Panel<'a, C, I> {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    max_x: u32,
    max_y: u32,

    /// Drawn and hit-tested only when set.
    pub enabled: bool,
    /// Hit-tested only when set. Independent of `enabled`.
    pub touchable: bool,
    pub style: PanelStyle<'a, C>,

    image: Option<&'a I>,
    text: TextLines,
    name: Label,
    tag: Label,
}

impl<'a, C, I> Panel<'a, C, I> {
    /// Create an enabled, touchable, empty panel.
    ///
    /// Bounds saturate at `u32::MAX`.
    pub const fn new(
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        style: PanelStyle<'a, C>,
    ) -> Self {
        Self {
            x,
            y,
            w,
            h,
            max_x: x.saturating_add(w),
            max_y: y.saturating_add(h),
            enabled: true,
            touchable: true,
            style,
            image: None,
            text: TextLines::new(),
            name: Label::new(),
            tag: Label::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    #[inline]
    pub const fn x(&self) -> u32 { self.x }

    #[inline]
    pub const fn y(&self) -> u32 { self.y }

    #[inline]
    pub const fn width(&self) -> u32 { self.w }

    #[inline]
    pub const fn height(&self) -> u32 { self.h }

    /// Right edge, `x + w`.
    #[inline]
    pub const fn max_x(&self) -> u32 { self.max_x }

    /// Bottom edge, `y + h`.
    #[inline]
    pub const fn max_y(&self) -> u32 { self.max_y }

    /// Top-left corner in display coordinates.
    #[inline]
    pub const fn origin(&self) -> Point { Point::new(self.x as i32, self.y as i32) }

    /// Area covered by the background.
    #[inline]
    pub const fn bounds(&self) -> Rectangle { Rectangle::new(self.origin(), Size::new(self.w, self.h)) }

    /// Enabled and not degenerate.
    #[inline]
    pub const fn is_visible(&self) -> bool { self.enabled && self.w > 0 && self.h > 0 }

    // =========================================================================
    // Touch
    // =========================================================================

    /// Whether a touch at (`px`, `py`) lands on this panel.
    ///
    /// Disabled or non-touchable panels never match. Bounds are inclusive on
    /// all four sides. Negative readings from the digitizer simply miss.
    pub fn is_touch_on_panel(
        &self,
        px: i32,
        py: i32,
    ) -> bool {
        let (px, py) = (i64::from(px), i64::from(py));
        self.enabled
            && self.touchable
            && (i64::from(self.x)..=i64::from(self.max_x)).contains(&px)
            && (i64::from(self.y)..=i64::from(self.max_y)).contains(&py)
    }

    /// [`Self::is_touch_on_panel`] for a [`Point`].
    #[inline]
    pub fn contains(
        &self,
        point: Point,
    ) -> bool {
        self.is_touch_on_panel(point.x, point.y)
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// What [`Self::draw_content`] will render.
    pub fn content(&self) -> Content<'_, I> { Content::resolve(self.image, &self.text) }

    pub const fn image(&self) -> Option<&'a I> { self.image }

    /// Show `image` instead of the text. `None` brings the text back.
    pub fn set_image(
        &mut self,
        image: Option<&'a I>,
    ) {
        self.image = image;
    }

    #[must_use]
    pub fn with_image(
        mut self,
        image: &'a I,
    ) -> Self {
        self.image = Some(image);
        self
    }

    /// Text lines in display order.
    pub fn text(&self) -> &[TextLine] { &self.text }

    /// Replace all text lines.
    ///
    /// Lines are truncated to [`content::LINE_CAPACITY`] bytes, lines beyond
    /// [`content::MAX_LINES`] are dropped.
    pub fn set_text(
        &mut self,
        lines: &[&str],
    ) {
        self.text.clear();
        for line in lines {
            if !content::push_line(&mut self.text, line) {
                break;
            }
        }
    }

    #[must_use]
    pub fn with_text(
        mut self,
        lines: &[&str],
    ) -> Self {
        self.set_text(lines);
        self
    }

    /// Append one line. Returns `false` when the panel is full.
    pub fn push_line(
        &mut self,
        line: &str,
    ) -> bool {
        content::push_line(&mut self.text, line)
    }

    pub fn clear_text(&mut self) { self.text.clear(); }

    // =========================================================================
    // Identity
    // =========================================================================

    pub fn name(&self) -> &str { self.name.as_str() }

    pub fn tag(&self) -> &str { self.tag.as_str() }

    pub fn set_name(
        &mut self,
        name: &str,
    ) {
        self.name = content::label(name);
    }

    pub fn set_tag(
        &mut self,
        tag: &str,
    ) {
        self.tag = content::label(tag);
    }

    #[must_use]
    pub fn with_name(
        mut self,
        name: &str,
    ) -> Self {
        self.set_name(name);
        self
    }

    #[must_use]
    pub fn with_tag(
        mut self,
        tag: &str,
    ) -> Self {
        self.set_tag(tag);
        self
    }

    /// Font for text content, or `None` with a warning when text is set
    /// without one.
    fn text_font(&self) -> Option<&'a MonoFont<'a>> {
        if self.style.font.is_none() {
            warn!("panel '{}' has text but no font, skipping text", self.name.as_str());
        }
        self.style.font
    }
}

impl<C, I> Panel<'_, C, I>
where
    C: PixelColor,
    I: ImageDrawable<Color = C>,
{
    /// Draw the background, then the content.
    pub fn draw<S>(
        &self,
        surface: &mut S,
    ) -> Result<(), S::Error>
    where
        S: Surface<Color = C>,
    {
        self.draw_background(surface)?;
        self.draw_content(surface)
    }

    /// Fill the panel and draw its outline if enabled.
    pub fn draw_background<S>(
        &self,
        surface: &mut S,
    ) -> Result<(), S::Error>
    where
        S: Surface<Color = C>,
    {
        if !self.is_visible() {
            return Ok(());
        }
        trace!("background '{}' x={} y={} w={} h={}", self.name.as_str(), self.x, self.y, self.w, self.h);

        surface.filled_rectangle(self.bounds(), self.style.color)?;
        if self.style.outline {
            surface.rectangle(self.bounds(), self.style.text_color)?;
        }
        Ok(())
    }

    /// Draw the image, or the centered text, on top of the background.
    pub fn draw_content<S>(
        &self,
        surface: &mut S,
    ) -> Result<(), S::Error>
    where
        S: Surface<Color = C>,
    {
        if !self.is_visible() {
            return Ok(());
        }

        match self.content() {
            Content::Empty => Ok(()),
            Content::Image(image) => surface.image(self.origin(), image),
            Content::SingleLine(line) => {
                let Some(font) = self.text_font() else {
                    return Ok(());
                };
                let anchor = layout::single_line_anchor(&self.bounds(), self.style.vertical_offset);
                surface.print(anchor, font, self.style.text_color, TextAnchor::Center, line)
            }
            Content::MultiLine(lines) => {
                let Some(font) = self.text_font() else {
                    return Ok(());
                };
                let bounds = self.bounds();
                let line_height = layout::line_height(font, self.style.line_height_offset);
                let anchors = layout::multi_line_anchors(&bounds, lines.len(), line_height, self.style.vertical_offset);
                for (line, anchor) in lines.iter().zip(anchors) {
                    surface.print(anchor, font, self.style.text_color, TextAnchor::TopCenter, line)?;
                }
                Ok(())
            }
        }
    }
}
