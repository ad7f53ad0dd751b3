//! Pre-computed panel styles.
//!
//! `PanelStyle` has public fields, so every style used on the home screen is a
//! `const` built at compile time. Panels copy the style they are given, and
//! state changes swap in another constant instead of editing fields one by one.

use display_panel::PanelStyle;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{BLACK, DARK_GRAY, DARK_TEAL, GRAY, GREEN, WHITE, YELLOW};

// =============================================================================
// Fonts
// =============================================================================

/// Header title font (10x20 pixels).
pub const TITLE_FONT: &MonoFont = &FONT_10X20;

/// Button labels (`ProFont` 18pt).
pub const BUTTON_FONT: &MonoFont = &PROFONT_18_POINT;

/// Counter value (`ProFont` 24pt).
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Touch log lines (6x10 pixels).
pub const LOG_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Panel Styles
// =============================================================================

/// Header bar, single centered title.
pub const TITLE: PanelStyle<'static, Rgb565> = PanelStyle {
    color: DARK_TEAL,
    text_color: WHITE,
    outline: false,
    font: Some(TITLE_FONT),
    line_height_offset: 0,
    vertical_offset: 0,
};

/// Counter label and value. `ProFont` cells have generous leading, pull the
/// two lines closer.
pub const COUNTER: PanelStyle<'static, Rgb565> = PanelStyle {
    color: BLACK,
    text_color: GREEN,
    outline: true,
    font: Some(VALUE_FONT),
    line_height_offset: -4,
    vertical_offset: 0,
};

/// Frame around the icon image.
pub const ICON: PanelStyle<'static, Rgb565> = PanelStyle {
    color: BLACK,
    text_color: GRAY,
    outline: true,
    font: None,
    line_height_offset: 0,
    vertical_offset: 0,
};

/// Touchable button.
pub const BUTTON: PanelStyle<'static, Rgb565> = PanelStyle {
    color: GRAY,
    text_color: WHITE,
    outline: true,
    font: Some(BUTTON_FONT),
    line_height_offset: 0,
    vertical_offset: 0,
};

/// Button that is drawn but ignores touches while the keypad is locked.
pub const BUTTON_LOCKED: PanelStyle<'static, Rgb565> = PanelStyle {
    color: DARK_GRAY,
    text_color: GRAY,
    outline: true,
    font: Some(BUTTON_FONT),
    line_height_offset: 0,
    vertical_offset: 0,
};

/// Light toggle while the light is on.
pub const LIGHT_ON: PanelStyle<'static, Rgb565> = PanelStyle {
    color: YELLOW,
    text_color: BLACK,
    outline: true,
    font: Some(BUTTON_FONT),
    line_height_offset: 0,
    vertical_offset: 0,
};

/// Touch log strip. Not touchable.
pub const LOG: PanelStyle<'static, Rgb565> = PanelStyle {
    color: BLACK,
    text_color: GREEN,
    outline: true,
    font: Some(LOG_FONT),
    line_height_offset: 2,
    vertical_offset: 0,
};
