//! Application state and touch dispatch.
//!
//! The panels only report *which* panel was touched. What a touch means is
//! decided here, from the panel's tag:
//!
//! | Tag      | Action                                      |
//! |----------|---------------------------------------------|
//! | `plus`   | Counter + 1 (clamped to `COUNT_MAX`)        |
//! | `minus`  | Counter - 1 (clamped to `COUNT_MIN`)        |
//! | `reset`  | Counter back to 0                           |
//! | `light`  | Toggle the light, turning it off unlocks    |
//! | `lock`   | Toggle the keypad lock (only while lit)     |
//!
//! While locked, the counter buttons stay visible but stop accepting touches.

use embedded_graphics::prelude::Point;
use log::info;

use crate::config::{COUNT_MAX, COUNT_MIN};
use crate::touch_log::TouchLog;

/// Panel tags understood by [`Action::from_tag`].
pub mod tags {
    pub const PLUS: &str = "plus";
    pub const MINUS: &str = "minus";
    pub const RESET: &str = "reset";
    pub const LIGHT: &str = "light";
    pub const LOCK: &str = "lock";
}

/// What a touched panel asks the application to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Increment,
    Decrement,
    Reset,
    ToggleLight,
    ToggleLock,
}

impl Action {
    /// Map a panel tag to its action. Unknown tags do nothing.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            tags::PLUS => Some(Self::Increment),
            tags::MINUS => Some(Self::Decrement),
            tags::RESET => Some(Self::Reset),
            tags::LIGHT => Some(Self::ToggleLight),
            tags::LOCK => Some(Self::ToggleLock),
            _ => None,
        }
    }
}

/// Everything the home screen displays.
pub struct AppState {
    pub count: i32,
    pub light_on: bool,
    pub locked: bool,
    pub log: TouchLog,
}

impl AppState {
    pub const fn new() -> Self {
        Self {
            count: 0,
            light_on: false,
            locked: false,
            log: TouchLog::new(),
        }
    }

    /// Apply `action` to the state.
    pub fn handle(
        &mut self,
        action: Action,
    ) {
        match action {
            Action::Increment => self.count = (self.count + 1).min(COUNT_MAX),
            Action::Decrement => self.count = (self.count - 1).max(COUNT_MIN),
            Action::Reset => self.count = 0,
            Action::ToggleLight => {
                self.light_on = !self.light_on;
                if !self.light_on {
                    self.locked = false;
                }
            }
            Action::ToggleLock => self.locked = !self.locked,
        }
    }

    /// Record a touch result and run the touched panel's action, if any.
    ///
    /// `hit` is the touched panel's `(name, tag)`, `None` for a miss.
    /// Returns the action that ran.
    pub fn dispatch(
        &mut self,
        point: Point,
        hit: Option<(&str, &str)>,
    ) -> Option<Action> {
        self.log.push_touch(point, hit.map(|(name, _)| name));

        let (name, tag) = hit?;
        let action = Action::from_tag(tag)?;
        info!("{name}: {action:?}");
        self.handle(action);
        Some(action)
    }
}

impl Default for AppState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Tag Mapping Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_action_from_tag() {
        assert_eq!(Action::from_tag("plus"), Some(Action::Increment));
        assert_eq!(Action::from_tag("minus"), Some(Action::Decrement));
        assert_eq!(Action::from_tag("reset"), Some(Action::Reset));
        assert_eq!(Action::from_tag("light"), Some(Action::ToggleLight));
        assert_eq!(Action::from_tag("lock"), Some(Action::ToggleLock));
    }

    #[test]
    fn test_unknown_tag_has_no_action() {
        assert_eq!(Action::from_tag(""), None);
        assert_eq!(Action::from_tag("PLUS"), None, "Tags are case sensitive");
    }

    // -------------------------------------------------------------------------
    // Counter Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_counter_actions() {
        let mut state = AppState::new();
        state.handle(Action::Increment);
        state.handle(Action::Increment);
        assert_eq!(state.count, 2);

        state.handle(Action::Decrement);
        assert_eq!(state.count, 1);

        state.handle(Action::Reset);
        assert_eq!(state.count, 0);
    }

    #[test]
    fn test_counter_is_clamped() {
        let mut state = AppState::new();
        state.count = COUNT_MAX;
        state.handle(Action::Increment);
        assert_eq!(state.count, COUNT_MAX);

        state.count = COUNT_MIN;
        state.handle(Action::Decrement);
        assert_eq!(state.count, COUNT_MIN);
    }

    // -------------------------------------------------------------------------
    // Light and Lock Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_light_off_unlocks() {
        let mut state = AppState::new();
        state.handle(Action::ToggleLight);
        state.handle(Action::ToggleLock);
        assert!(state.light_on && state.locked);

        state.handle(Action::ToggleLight);
        assert!(!state.light_on);
        assert!(!state.locked, "Turning the light off releases the lock");
    }

    // -------------------------------------------------------------------------
    // Touch Dispatch Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_dispatch_runs_action_and_logs() {
        let mut state = AppState::new();
        let action = state.dispatch(Point::new(40, 140), Some(("Plus", tags::PLUS)));
        assert_eq!(action, Some(Action::Increment));
        assert_eq!(state.count, 1);
        assert_eq!(state.log.iter().next(), Some("Plus @ 40,140"));
    }

    #[test]
    fn test_dispatch_miss_only_logs() {
        let mut state = AppState::new();
        assert_eq!(state.dispatch(Point::new(0, 0), None), None);
        assert_eq!(state.count, 0);
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_dispatch_untagged_panel() {
        let mut state = AppState::new();
        assert_eq!(state.dispatch(Point::new(10, 10), Some(("Title", ""))), None);
        assert_eq!(state.log.iter().next(), Some("Title @ 10,10"));
    }
}
