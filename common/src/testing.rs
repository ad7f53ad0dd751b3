//! Test doubles shared by the unit tests.

use embedded_graphics::image::{ImageDrawable, ImageRaw};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::panel::Panel;
use crate::surface::{Surface, TextAnchor};

/// Panel type used throughout the tests.
pub type TestPanel<'a> = Panel<'a, Rgb565, ImageRaw<'static, Rgb565>>;

/// 4×2 RGB565 image (2 bytes per pixel).
pub fn icon() -> ImageRaw<'static, Rgb565> { ImageRaw::new(&[0xFF; 16], 4) }

/// One surface call, as seen by [`RecordingSurface`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Call {
    FilledRect { area: Rectangle, color: Rgb565 },
    Outline { area: Rectangle, color: Rgb565 },
    Image { origin: Point, size: Size },
    Print { position: Point, anchor: TextAnchor, color: Rgb565, text: String },
}

impl Call {
    pub fn print(
        position: Point,
        anchor: TextAnchor,
        color: Rgb565,
        text: &str,
    ) -> Self {
        Self::Print { position, anchor, color, text: text.to_string() }
    }

    /// Text position of a print call.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Print { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Panel area of a background call.
    pub fn area(&self) -> Option<Rectangle> {
        match self {
            Self::FilledRect { area, .. } | Self::Outline { area, .. } => Some(*area),
            _ => None,
        }
    }
}

/// Surface failure injected by [`RecordingSurface::failing_after`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DrawFailed;

/// Surface that records every call in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    fail_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    /// Accept `count` calls, then fail every call after that.
    pub fn failing_after(count: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_after: Some(count),
        }
    }

    fn record(
        &mut self,
        call: Call,
    ) -> Result<(), DrawFailed> {
        if self.fail_after.is_some_and(|limit| self.calls.len() >= limit) {
            return Err(DrawFailed);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    type Color = Rgb565;
    type Error = DrawFailed;

    fn filled_rectangle(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) -> Result<(), DrawFailed> {
        self.record(Call::FilledRect { area, color })
    }

    fn rectangle(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) -> Result<(), DrawFailed> {
        self.record(Call::Outline { area, color })
    }

    fn image<I>(
        &mut self,
        origin: Point,
        image: &I,
    ) -> Result<(), DrawFailed>
    where
        I: ImageDrawable<Color = Self::Color>,
    {
        self.record(Call::Image { origin, size: image.size() })
    }

    fn print(
        &mut self,
        position: Point,
        _font: &MonoFont<'_>,
        color: Rgb565,
        anchor: TextAnchor,
        text: &str,
    ) -> Result<(), DrawFailed> {
        self.record(Call::print(position, anchor, color, text))
    }
}
