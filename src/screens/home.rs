//! Home screen panel layout.
//!
//! ```text
//! +-------------------------------------------+
//! |                PANEL DEMO                 |  title
//! +---------------------+---------+-----------+
//! |        COUNT        |  bulb   |  LIGHT    |
//! |          0          |  icon   |   OFF     |
//! +---------+-----------+---------+-----------+
//! |    +    |     -     |  RESET  |   LOCK    |
//! +---------+-----------+---------+-----------+
//! | touch log                                 |
//! +-------------------------------------------+
//! ```
//!
//! Panels live in one array, addressed by [`panel_idx`]. Array order is the
//! z-order: backgrounds are painted in this order and hit-testing returns the
//! first match. No two panels overlap, so the order only matters for drawing.

use core::fmt::Write;

use display_panel::Panel;
use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::app::{AppState, tags};
use crate::config::{
    BUTTON_HEIGHT, BUTTON_ROW_Y, COL_WIDTH, GAP, HEADER_HEIGHT, LOG_HEIGHT, LOG_WIDTH, LOG_Y, SCREEN_WIDTH,
    TOP_ROW_HEIGHT, TOP_ROW_Y, col_x,
};
use crate::icon::Icons;
use crate::styles;

/// Panel type used by the simulator.
pub type AppPanel<'a> = Panel<'a, Rgb565, ImageRaw<'static, Rgb565>>;

/// Panel indices in the home screen array.
pub mod panel_idx {
    pub const TITLE: usize = 0;
    pub const COUNTER: usize = 1;
    pub const ICON: usize = 2;
    pub const LIGHT: usize = 3;
    pub const PLUS: usize = 4;
    pub const MINUS: usize = 5;
    pub const RESET: usize = 6;
    pub const LOCK: usize = 7;
    pub const LOG: usize = 8;
}

pub const PANEL_COUNT: usize = 9;

const TITLE_TEXT: &str = "PANEL DEMO";
const LOG_PLACEHOLDER: &str = "touch a panel";

/// Build the home screen panels in their initial (default state) form.
pub fn build_home<'a>(icons: &'a Icons<'static>) -> [AppPanel<'a>; PANEL_COUNT] {
    let counter_width = 2 * COL_WIDTH + GAP;

    let mut panels = [
        Panel::new(0, 0, SCREEN_WIDTH, HEADER_HEIGHT, styles::TITLE).with_name("Title").with_text(&[TITLE_TEXT]),
        Panel::new(col_x(0), TOP_ROW_Y, counter_width, TOP_ROW_HEIGHT, styles::COUNTER).with_name("Counter"),
        Panel::new(col_x(2), TOP_ROW_Y, COL_WIDTH, TOP_ROW_HEIGHT, styles::ICON)
            .with_name("Bulb")
            .with_tag(tags::LIGHT)
            .with_image(&icons.dark),
        Panel::new(col_x(3), TOP_ROW_Y, COL_WIDTH, TOP_ROW_HEIGHT, styles::BUTTON)
            .with_name("Light")
            .with_tag(tags::LIGHT),
        Panel::new(col_x(0), BUTTON_ROW_Y, COL_WIDTH, BUTTON_HEIGHT, styles::BUTTON)
            .with_name("Plus")
            .with_tag(tags::PLUS)
            .with_text(&["+"]),
        Panel::new(col_x(1), BUTTON_ROW_Y, COL_WIDTH, BUTTON_HEIGHT, styles::BUTTON)
            .with_name("Minus")
            .with_tag(tags::MINUS)
            .with_text(&["-"]),
        Panel::new(col_x(2), BUTTON_ROW_Y, COL_WIDTH, BUTTON_HEIGHT, styles::BUTTON)
            .with_name("Reset")
            .with_tag(tags::RESET)
            .with_text(&["RESET"]),
        Panel::new(col_x(3), BUTTON_ROW_Y, COL_WIDTH, BUTTON_HEIGHT, styles::BUTTON)
            .with_name("Lock")
            .with_tag(tags::LOCK)
            .with_text(&["LOCK"]),
        Panel::new(GAP, LOG_Y, LOG_WIDTH, LOG_HEIGHT, styles::LOG).with_name("Log"),
    ];

    panels[panel_idx::TITLE].touchable = false;
    panels[panel_idx::COUNTER].touchable = false;
    panels[panel_idx::LOG].touchable = false;

    sync_home(&mut panels, &AppState::new(), icons);
    panels
}

/// Bring every state-dependent panel in line with `state`.
pub fn sync_home<'a>(
    panels: &mut [AppPanel<'a>; PANEL_COUNT],
    state: &AppState,
    icons: &'a Icons<'static>,
) {
    let mut value: String<8> = String::new();
    write!(value, "{}", state.count).ok();
    panels[panel_idx::COUNTER].set_text(&["COUNT", value.as_str()]);

    // Light toggle and its icon
    let (light_style, light_text, bulb) = if state.light_on {
        (styles::LIGHT_ON, "ON", &icons.lit)
    } else {
        (styles::BUTTON, "OFF", &icons.dark)
    };
    panels[panel_idx::LIGHT].style = light_style;
    panels[panel_idx::LIGHT].set_text(&["LIGHT", light_text]);
    panels[panel_idx::ICON].set_image(Some(bulb));

    // Lock is only offered while the light is on
    let lock = &mut panels[panel_idx::LOCK];
    lock.enabled = state.light_on;
    lock.style = if state.locked { styles::LIGHT_ON } else { styles::BUTTON };

    for idx in [panel_idx::PLUS, panel_idx::MINUS, panel_idx::RESET] {
        let button = &mut panels[idx];
        button.touchable = !state.locked;
        button.style = if state.locked { styles::BUTTON_LOCKED } else { styles::BUTTON };
    }

    let log = &mut panels[panel_idx::LOG];
    log.clear_text();
    if state.log.is_empty() {
        log.push_line(LOG_PLACEHOLDER);
    }
    for line in state.log.iter() {
        log.push_line(line);
    }
}
