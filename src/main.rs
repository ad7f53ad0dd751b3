// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Touch panel simulator.
//!
//! Runs the `display-panel` crate against an SDL window instead of a real
//! display. A mouse click stands in for the touch controller: the click
//! position is hit-tested against the home screen panels and the touched
//! panel's tag drives [`app::AppState`].
//!
//! # Home Screen
//!
//! | Panel   | Touch                                   |
//! |---------|-----------------------------------------|
//! | `+`/`-` | Change the counter                      |
//! | RESET   | Counter back to zero                    |
//! | LIGHT   | Toggle the light (the bulb icon as well) |
//! | LOCK    | Lock the counter buttons (light on only) |
//!
//! The bottom panel shows the last few touches, misses included.
//!
//! # Rendering
//!
//! The screen is only redrawn after a touch changed something. A redraw clears
//! the display and paints every panel with [`draw_all_panels`], backgrounds
//! first, then content.
//!
//! # Logging
//!
//! Log output goes to stderr through `env_logger`. The default level is
//! `info`; set `RUST_LOG=debug` to see every hit-test match or
//! `RUST_LOG=trace` for per-panel draw passes.

mod app;
mod colors;
mod config;
mod icon;
mod screens;
mod styles;
mod touch_log;

use std::thread;
use std::time::Instant;

use app::AppState;
use colors::BLACK;
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE, WINDOW_TITLE};
use display_panel::{draw_all_panels, touched_panel};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use icon::Icons;
use log::{debug, info};
use screens::{build_home, sync_home};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    // Panels borrow the icons, so they are declared first
    let icons = Icons::new();
    let mut panels = build_home(&icons);
    let mut state = AppState::new();
    let mut dirty = true;

    info!("{} panels, {}x{} display", panels.len(), SCREEN_WIDTH, SCREEN_HEIGHT);

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        if dirty {
            display.clear(BLACK).ok();
            draw_all_panels(&mut display, &panels).ok();
            dirty = false;
        }
        window.update(&display);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!("window closed, count={}", state.count);
                    return;
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    let hit = touched_panel(&panels, point.x, point.y).map(|panel| (panel.name(), panel.tag()));
                    if hit.is_none() {
                        debug!("no panel at x={}, y={}", point.x, point.y);
                    }
                    state.dispatch(point, hit);
                    sync_home(&mut panels, &state, &icons);
                    dirty = true;
                }
                _ => {}
            }
        }

        // Sleep to maintain target frame rate (~50 FPS)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
