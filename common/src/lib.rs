//! Touch panels for small embedded displays.
//!
//! A [`Panel`] is a rectangle on the display with a fill color, optional
//! outline, and either an image or one or more lines of centered text. A
//! slice of panels forms a layer that can be drawn in one go and hit-tested
//! against touch coordinates:
//!
//! - [`panel`]: the panel entity, its two draw passes and its touch test
//! - [`layer`]: batch drawing and first-match hit-testing over a panel slice
//! - [`layout`]: text anchor computation (single-line and stacked lines)
//! - [`content`]: bounded text storage and the resolved [`Content`] view
//! - [`style`]: fill/text colors, font and layout offsets
//! - [`surface`]: the drawing interface, implemented for every `DrawTarget`
//! - [`font`]: glyph metrics used by the layout
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and never allocates. Text lives in `heapless`
//! buffers, fonts and images are borrowed from the application.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod content;
pub mod font;
pub mod layer;
pub mod layout;
pub mod panel;
pub mod style;
pub mod surface;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use content::{Content, LABEL_CAPACITY, LINE_CAPACITY, MAX_LINES};
pub use font::{FontMetrics, GlyphMetrics};
pub use layer::{PanelLayer, draw_all_panels, touched_panel, touched_panel_index};
pub use panel::Panel;
pub use style::PanelStyle;
pub use surface::{Surface, TextAnchor};
