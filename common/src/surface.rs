//! Drawing interface used by panels.
//!
//! [`Surface`] is the small set of primitives a panel needs: filled and
//! outlined rectangles, images at native size, and anchored text. Every
//! `embedded-graphics` [`DrawTarget`] is a `Surface` through the blanket
//! implementation below, so panels draw straight onto a simulator window,
//! a framebuffer or a display driver.

use embedded_graphics::image::{Image, ImageDrawable};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};

/// Horizontally centered, vertically centered on the anchor point.
const CENTER_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Horizontally centered, top of the glyph cell at the anchor point.
const CENTER_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// How a text position relates to the rendered string.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextAnchor {
    /// The point is the center of the text box.
    Center,
    /// The point is the middle of the top edge of the text box.
    TopCenter,
}

impl TextAnchor {
    /// The `embedded-graphics` text style implementing this anchor.
    #[inline]
    pub const fn text_style(self) -> TextStyle {
        match self {
            Self::Center => CENTER_MIDDLE,
            Self::TopCenter => CENTER_TOP,
        }
    }
}

/// A display the panels can be drawn on.
pub trait Surface {
    /// Pixel color of the display.
    type Color: PixelColor;
    /// Error reported by the underlying driver.
    type Error;

    /// Fill `area` with `color`.
    fn filled_rectangle(
        &mut self,
        area: Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Draw a one pixel outline along the inside of `area`.
    fn rectangle(
        &mut self,
        area: Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Draw `image` with its top-left corner at `origin`, unscaled.
    fn image<I>(
        &mut self,
        origin: Point,
        image: &I,
    ) -> Result<(), Self::Error>
    where
        I: ImageDrawable<Color = Self::Color>;

    /// Draw `text` in `font` so that `position` lands on the `anchor`.
    fn print(
        &mut self,
        position: Point,
        font: &MonoFont<'_>,
        color: Self::Color,
        anchor: TextAnchor,
        text: &str,
    ) -> Result<(), Self::Error>;
}

impl<D> Surface for D
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn filled_rectangle(
        &mut self,
        area: Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        area.into_styled(PrimitiveStyle::with_fill(color)).draw(self)
    }

    fn rectangle(
        &mut self,
        area: Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let outline = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        area.into_styled(outline).draw(self)
    }

    fn image<I>(
        &mut self,
        origin: Point,
        image: &I,
    ) -> Result<(), Self::Error>
    where
        I: ImageDrawable<Color = Self::Color>,
    {
        Image::new(image, origin).draw(self)
    }

    fn print(
        &mut self,
        position: Point,
        font: &MonoFont<'_>,
        color: Self::Color,
        anchor: TextAnchor,
        text: &str,
    ) -> Result<(), Self::Error> {
        Text::with_text_style(text, position, MonoTextStyle::new(font, color), anchor.text_style())
            .draw(self)
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::image::ImageRaw;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::BinaryColor;

    use super::*;

    #[test]
    fn test_anchor_text_styles() {
        assert_eq!(TextAnchor::Center.text_style().baseline, Baseline::Middle);
        assert_eq!(TextAnchor::TopCenter.text_style().baseline, Baseline::Top);
        assert_eq!(TextAnchor::Center.text_style().alignment, Alignment::Center);
        assert_eq!(TextAnchor::TopCenter.text_style().alignment, Alignment::Center);
    }

    #[test]
    fn test_filled_rectangle_on_draw_target() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let area = Rectangle::new(Point::new(1, 1), Size::new(3, 2));
        display.filled_rectangle(area, BinaryColor::On).unwrap();

        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(3, 2)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(4, 1)), None, "Right of the area is untouched");
        assert_eq!(display.get_pixel(Point::new(1, 3)), None, "Below the area is untouched");
    }

    #[test]
    fn test_outline_stays_inside_area() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let area = Rectangle::new(Point::new(2, 2), Size::new(5, 4));
        display.rectangle(area, BinaryColor::On).unwrap();

        assert_eq!(display.affected_area(), area, "Stroke is aligned inside the bounds");
        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(6, 5)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(4, 3)), None, "Interior is not filled");
    }

    #[test]
    fn test_image_at_native_size() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let image: ImageRaw<BinaryColor> = ImageRaw::new(&[0b1010_0000], 4);
        display.image(Point::new(2, 3), &image).unwrap();

        assert_eq!(display.get_pixel(Point::new(2, 3)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(4, 3)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(6, 3)), None, "Image is not scaled");
        assert_eq!(display.affected_area(), Rectangle::new(Point::new(2, 3), Size::new(4, 1)));
    }

    #[test]
    fn test_print_top_center_starts_at_anchor() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display
            .print(Point::new(20, 5), &FONT_6X10, BinaryColor::On, TextAnchor::TopCenter, "M")
            .unwrap();

        let area = display.affected_area();
        assert!(area.size.width > 0, "Glyph should be drawn");
        assert!(area.top_left.y >= 5, "Nothing is drawn above a top anchor");
        assert!(area.top_left.x >= 17 && area.top_left.x < 20, "Glyph is centered on x");
    }

    #[test]
    fn test_print_center_straddles_anchor() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display
            .print(Point::new(20, 20), &FONT_6X10, BinaryColor::On, TextAnchor::Center, "M")
            .unwrap();

        let area = display.affected_area();
        assert!(area.top_left.y < 20, "Glyph starts above a middle anchor");
        assert!(area.bottom_right().is_some_and(|p| p.y > 20), "Glyph ends below a middle anchor");
    }
}
