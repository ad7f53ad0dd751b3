//! Color constants for the panel simulator.
//!
//! Standard colors come from the `RgbColor` trait constants of
//! `embedded_graphics`. The raw `u16` values next to the custom colors are
//! used by the compile-time icon generator, which cannot call trait methods.
//!
//! ## Rgb565 Color Format
//!
//! 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Screen background and dark panel fills.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Default text color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Counter and log text.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Light toggle when on.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Button fill. RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Locked button fill, darker than `GRAY`. RGB565: (4, 8, 4).
pub const DARK_GRAY: Rgb565 = Rgb565::new(4, 8, 4);

/// Header bar. RGB565: (0, 20, 10) - blue-green.
pub const DARK_TEAL: Rgb565 = Rgb565::new(0, 20, 10);

// =============================================================================
// Raw Values (for const image generation)
// =============================================================================

/// Pack 5/6/5 components into a big-endian-ready RGB565 word.
pub const fn rgb565_raw(
    r: u8,
    g: u8,
    b: u8,
) -> u16 {
    ((r as u16 & 0x1F) << 11) | ((g as u16 & 0x3F) << 5) | (b as u16 & 0x1F)
}

pub const RAW_BLACK: u16 = rgb565_raw(0, 0, 0);
pub const RAW_YELLOW: u16 = rgb565_raw(31, 63, 0);
pub const RAW_ORANGE: u16 = rgb565_raw(31, 32, 0);
pub const RAW_GRAY: u16 = rgb565_raw(8, 16, 8);
pub const RAW_DARK_GRAY: u16 = rgb565_raw(4, 8, 4);
