//! Text placement inside a panel.
//!
//! Two placement rules exist, and they use different anchors:
//!
//! - **Single line**: anchored at its true center, placed at the panel's
//!   center (plus the vertical offset).
//! - **Several lines**: each line anchored at its top-center. The block of
//!   `line_count × line_height` pixels is centered vertically, lines are
//!   stacked downwards from the block top.
//!
//! ```text
//! ┌──────────────────────────┐  y
//! │                          │  top padding = (h - n·L) / 2, floored, ≥ 0
//! │          LINE 0          │  y + pad + 0·L + vertical_offset
//! │          LINE 1          │  y + pad + 1·L + vertical_offset
//! │                          │
//! └──────────────────────────┘  y + h
//! ```
//!
//! A block taller than the panel gets zero padding: it starts at the top and
//! overflows the bottom edge instead of being pushed above the panel.
//!
//! All math is `i32` pixel math. Odd leftovers are floored, so the spare pixel
//! ends up below the text.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

use crate::font::{FontMetrics, REFERENCE_GLYPH};

/// Horizontal center of `area`, floored.
#[inline]
pub const fn center_x(area: &Rectangle) -> i32 {
    area.top_left.x + (area.size.width / 2) as i32
}

/// Anchor for a lone line of text, to be used with a center anchor.
pub const fn single_line_anchor(
    area: &Rectangle,
    vertical_offset: i32,
) -> Point {
    Point::new(
        center_x(area),
        area.top_left.y + (area.size.height / 2) as i32 + vertical_offset,
    )
}

/// Effective line height: the font's reference glyph height plus `offset`.
pub fn line_height<F>(
    font: &F,
    offset: i32,
) -> i32
where
    F: FontMetrics + ?Sized,
{
    font.measure(REFERENCE_GLYPH).text_height as i32 + offset
}

/// Space above a block of `line_count` lines in a panel `panel_height` tall.
pub const fn top_padding(
    panel_height: u32,
    line_count: usize,
    line_height: i32,
) -> i32 {
    let block = (line_count as i32).saturating_mul(line_height);
    let padding = (panel_height as i32).saturating_sub(block).div_euclid(2);
    if padding < 0 { 0 } else { padding }
}

/// Top-center anchors of `line_count` stacked lines, in line order.
pub fn multi_line_anchors(
    area: &Rectangle,
    line_count: usize,
    line_height: i32,
    vertical_offset: i32,
) -> impl Iterator<Item = Point> {
    let x = center_x(area);
    let top = area.top_left.y + top_padding(area.size.height, line_count, line_height) + vertical_offset;
    (0..line_count).map(move |line| Point::new(x, top + line as i32 * line_height))
}
