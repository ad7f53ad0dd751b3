//! Application configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Panel geometry is fixed at construction, so every rectangle on the home
//! screen is a compile-time constant derived from a small grid: a header bar,
//! a tall top row, a button row and a log strip, separated by `GAP` pixels.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │              PANEL DEMO              │  HEADER_HEIGHT
//! ├──────────────────┬────────┬──────────┤
//! │      COUNT       │  ICON  │  LIGHT   │  TOP_ROW_HEIGHT
//! ├────────┬─────────┼────────┼──────────┤
//! │   +    │    -    │ RESET  │   LOCK   │  BUTTON_HEIGHT
//! ├────────┴─────────┴────────┴──────────┤
//! │ touch log                            │  LOG_HEIGHT
//! └──────────────────────────────────────┘
//! ```

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (320x240 panel with resistive touch overlay)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Simulator window scale factor.
pub const WINDOW_SCALE: u32 = 2;

/// Simulator window title.
pub const WINDOW_TITLE: &str = "Touch Panel Sim";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

// =============================================================================
// Counter Configuration
// =============================================================================

/// Counter never goes below this value.
pub const COUNT_MIN: i32 = -999;

/// Counter never goes above this value.
pub const COUNT_MAX: i32 = 999;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Spacing between panels and around the screen edge.
pub const GAP: u32 = 8;

/// Width of one of the four grid columns.
pub const COL_WIDTH: u32 = (SCREEN_WIDTH - 5 * GAP) / 4;

/// X coordinate of grid column `n` (0..4).
pub const fn col_x(n: u32) -> u32 { GAP + n * (COL_WIDTH + GAP) }

/// Top row: counter (two columns), icon, light toggle.
pub const TOP_ROW_Y: u32 = HEADER_HEIGHT + GAP;
pub const TOP_ROW_HEIGHT: u32 = 84;

/// Button row: plus, minus, reset, lock.
pub const BUTTON_ROW_Y: u32 = TOP_ROW_Y + TOP_ROW_HEIGHT + GAP;
pub const BUTTON_HEIGHT: u32 = 40;

/// Touch log strip along the bottom edge.
pub const LOG_Y: u32 = BUTTON_ROW_Y + BUTTON_HEIGHT + GAP;
pub const LOG_WIDTH: u32 = SCREEN_WIDTH - 2 * GAP;
pub const LOG_HEIGHT: u32 = SCREEN_HEIGHT - LOG_Y - GAP;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_fits_screen() {
        assert_eq!(COL_WIDTH, 70, "Four 70px columns with 8px gaps span 320px");
        assert_eq!(col_x(3) + COL_WIDTH + GAP, SCREEN_WIDTH);
    }

    #[test]
    fn test_rows_fit_screen() {
        assert_eq!(TOP_ROW_Y, 34);
        assert_eq!(BUTTON_ROW_Y, 126);
        assert_eq!(LOG_Y, 174);
        assert_eq!(LOG_Y + LOG_HEIGHT + GAP, SCREEN_HEIGHT);
    }

    #[test]
    fn test_count_range() {
        assert!(COUNT_MIN < 0 && COUNT_MAX > 0, "Counter range should include zero");
    }
}
