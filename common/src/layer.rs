//! Operations over an ordered list of panels.
//!
//! # List Order Is Significant
//!
//! The order of the slice is both the paint order and the touch priority:
//!
//! - [`draw_all_panels`] paints every background in list order, then every
//!   panel's content in list order. Content of an earlier panel is never
//!   covered by a later panel's background, even where edges overlap.
//! - [`touched_panel`] returns the *first* matching panel. Where touchable
//!   panels overlap, the one listed earlier wins.
//!
//! Nothing here adds, removes or reorders panels. The application owns the
//! list, usually as an array indexed by named constants, and mutates panels
//! between frames.

use core::slice;

use embedded_graphics::image::ImageDrawable;
use embedded_graphics::prelude::PixelColor;
use log::debug;

use crate::panel::Panel;
use crate::surface::Surface;

/// Draw all backgrounds, then all content, in list order.
///
/// Stops at the first surface error.
pub fn draw_all_panels<S, C, I>(
    surface: &mut S,
    panels: &[Panel<'_, C, I>],
) -> Result<(), S::Error>
where
    S: Surface<Color = C>,
    C: PixelColor,
    I: ImageDrawable<Color = C>,
{
    for panel in panels {
        panel.draw_background(surface)?;
    }
    for panel in panels {
        panel.draw_content(surface)?;
    }
    Ok(())
}

/// Position of the first panel that accepts a touch at (`px`, `py`).
pub fn touched_panel_index<C, I>(
    panels: &[Panel<'_, C, I>],
    px: i32,
    py: i32,
) -> Option<usize> {
    let (index, panel) = panels
        .iter()
        .enumerate()
        .find(|(_, panel)| panel.is_touch_on_panel(px, py))?;
    debug!("touched '{}' (#{}) x={}, y={}", panel.name(), index, px, py);
    Some(index)
}

/// First panel that accepts a touch at (`px`, `py`), or `None`.
pub fn touched_panel<'p, 'a, C, I>(
    panels: &'p [Panel<'a, C, I>],
    px: i32,
    py: i32,
) -> Option<&'p Panel<'a, C, I>> {
    touched_panel_index(panels, px, py).and_then(|index| panels.get(index))
}

/// A borrowed, ordered set of panels drawn and hit-tested together.
///
/// See the [module documentation](self) for what the order means.
pub struct PanelLayer<'p, 'a, C, I> {
    panels: &'p [Panel<'a, C, I>],
}

impl<'p, 'a, C, I> PanelLayer<'p, 'a, C, I> {
    pub const fn new(panels: &'p [Panel<'a, C, I>]) -> Self { Self { panels } }

    #[inline]
    pub const fn len(&self) -> usize { self.panels.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.panels.is_empty() }

    /// Panels in list order.
    pub fn iter(&self) -> slice::Iter<'p, Panel<'a, C, I>> { self.panels.iter() }

    /// See [`touched_panel`].
    pub fn touched(
        &self,
        px: i32,
        py: i32,
    ) -> Option<&'p Panel<'a, C, I>> {
        touched_panel(self.panels, px, py)
    }

    /// See [`touched_panel_index`].
    pub fn touched_index(
        &self,
        px: i32,
        py: i32,
    ) -> Option<usize> {
        touched_panel_index(self.panels, px, py)
    }
}

impl<C, I> PanelLayer<'_, '_, C, I>
where
    C: PixelColor,
    I: ImageDrawable<Color = C>,
{
    /// See [`draw_all_panels`].
    pub fn draw<S>(
        &self,
        surface: &mut S,
    ) -> Result<(), S::Error>
    where
        S: Surface<Color = C>,
    {
        draw_all_panels(surface, self.panels)
    }
}

impl<C, I> Clone for PanelLayer<'_, '_, C, I> {
    fn clone(&self) -> Self { *self }
}

impl<C, I> Copy for PanelLayer<'_, '_, C, I> {}
