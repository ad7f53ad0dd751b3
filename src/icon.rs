//! Light bulb icon generated at compile time.
//!
//! The icon is exactly the size of its panel and drawn unscaled at the panel
//! origin. Pixel data is big-endian RGB565 (the default byte order of
//! `ImageRaw`), computed by a `const fn` so no image file or build step is
//! needed.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{RAW_BLACK, RAW_DARK_GRAY, RAW_GRAY, RAW_ORANGE, RAW_YELLOW};
use crate::config::{COL_WIDTH, TOP_ROW_HEIGHT};

/// Icon width in pixels (one grid column).
pub const ICON_WIDTH: u32 = COL_WIDTH;

/// Icon height in pixels (the top row).
pub const ICON_HEIGHT: u32 = TOP_ROW_HEIGHT;

const ICON_BYTES: usize = (ICON_WIDTH * ICON_HEIGHT * 2) as usize;

// Bulb geometry, in icon pixels
const GLASS_CX: i32 = ICON_WIDTH as i32 / 2;
const GLASS_CY: i32 = 32;
const GLASS_R: i32 = 22;
const RIM_R: i32 = 24;
const BASE_X: (i32, i32) = (GLASS_CX - 9, GLASS_CX + 9);
const BASE_Y: (i32, i32) = (GLASS_CY + 20, GLASS_CY + 40);

/// Render the bulb into a pixel buffer.
const fn bulb(
    glass: u16,
    rim: u16,
    base: u16,
) -> [u8; ICON_BYTES] {
    let mut data = [0u8; ICON_BYTES];
    let mut y = 0;
    while y < ICON_HEIGHT as i32 {
        let mut x = 0;
        while x < ICON_WIDTH as i32 {
            let dx = x - GLASS_CX;
            let dy = y - GLASS_CY;
            let d2 = dx * dx + dy * dy;

            let color = if d2 <= GLASS_R * GLASS_R {
                glass
            } else if d2 <= RIM_R * RIM_R {
                rim
            } else if x >= BASE_X.0 && x < BASE_X.1 && y >= BASE_Y.0 && y < BASE_Y.1 {
                // Thread lines every third row
                if (y - BASE_Y.0) % 3 == 2 { RAW_BLACK } else { base }
            } else {
                RAW_BLACK
            };

            let i = ((y * ICON_WIDTH as i32 + x) * 2) as usize;
            data[i] = (color >> 8) as u8;
            data[i + 1] = color as u8;
            x += 1;
        }
        y += 1;
    }
    data
}

static BULB_LIT: [u8; ICON_BYTES] = bulb(RAW_YELLOW, RAW_ORANGE, RAW_GRAY);
static BULB_DARK: [u8; ICON_BYTES] = bulb(RAW_DARK_GRAY, RAW_GRAY, RAW_GRAY);

/// Both bulb images. Panels borrow them, so they live in `main`.
pub struct Icons<'a> {
    pub lit: ImageRaw<'a, Rgb565>,
    pub dark: ImageRaw<'a, Rgb565>,
}

impl Icons<'static> {
    pub fn new() -> Self {
        Self {
            lit: ImageRaw::new(&BULB_LIT, ICON_WIDTH),
            dark: ImageRaw::new(&BULB_DARK, ICON_WIDTH),
        }
    }
}

impl Default for Icons<'static> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;

    fn pixel(
        data: &[u8],
        x: i32,
        y: i32,
    ) -> u16 {
        let i = ((y * ICON_WIDTH as i32 + x) * 2) as usize;
        u16::from_be_bytes([data[i], data[i + 1]])
    }

    #[test]
    fn test_icon_matches_panel_size() {
        let icons = Icons::new();
        assert_eq!(icons.lit.size(), Size::new(ICON_WIDTH, ICON_HEIGHT));
        assert_eq!(icons.dark.size(), Size::new(ICON_WIDTH, ICON_HEIGHT));
    }

    #[test]
    fn test_bulb_regions() {
        assert_eq!(pixel(&BULB_LIT, GLASS_CX, GLASS_CY), RAW_YELLOW, "Glass center");
        assert_eq!(pixel(&BULB_LIT, GLASS_CX, GLASS_CY - 23), RAW_ORANGE, "Rim");
        assert_eq!(pixel(&BULB_LIT, GLASS_CX, BASE_Y.0 + 6), RAW_GRAY, "Base");
        assert_eq!(pixel(&BULB_LIT, GLASS_CX, BASE_Y.0 + 8), RAW_BLACK, "Thread line");
        assert_eq!(pixel(&BULB_LIT, 0, 0), RAW_BLACK, "Background corner");
    }

    #[test]
    fn test_dark_bulb_shares_base_and_background() {
        assert_eq!(pixel(&BULB_DARK, GLASS_CX, GLASS_CY), RAW_DARK_GRAY);
        assert_eq!(pixel(&BULB_DARK, 0, 0), pixel(&BULB_LIT, 0, 0));
        assert_eq!(pixel(&BULB_DARK, GLASS_CX, BASE_Y.0 + 6), pixel(&BULB_LIT, GLASS_CX, BASE_Y.0 + 6));
    }
}
