//! Screen modules.
//!
//! The simulator has a single screen, the [`home`] panel layout. Screens are
//! built once into a fixed panel array and then kept in sync with
//! [`crate::app::AppState`] after every touch.

pub mod home;

pub use home::{AppPanel, PANEL_COUNT, build_home, panel_idx, sync_home};
