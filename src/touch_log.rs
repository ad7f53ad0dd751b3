//! On-screen touch log.
//!
//! Ring buffer of the most recent touch events, shown in the log panel at the
//! bottom of the home screen. Old entries are dropped when the buffer is full.
//! Lines are capped at the panel's line capacity so nothing is truncated a
//! second time when they are copied into the panel.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = TouchLog::new();
//! log.push_touch(Point::new(120, 140), Some("Plus"));
//! log.push_touch(Point::new(5, 5), None);
//!
//! panel.clear_text();
//! for line in log.iter() {
//!     panel.push_line(line);
//! }
//! ```

use core::fmt::Write;

use display_panel::LINE_CAPACITY;
use embedded_graphics::prelude::Point;
use heapless::{Deque, String};

/// Number of lines kept (and shown) in the log.
pub const LOG_LINES: usize = 3;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = LINE_CAPACITY;

/// Ring buffer of touch log lines.
pub struct TouchLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_LINES>,
}

impl TouchLog {
    /// Create a new empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a message. If the buffer is full, the oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        // Truncate message if too long
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Record a touch at `point` on the panel called `name`, or a miss.
    pub fn push_touch(
        &mut self,
        point: Point,
        name: Option<&str>,
    ) {
        let mut line: String<64> = String::new();
        match name {
            Some(name) => write!(line, "{name} @ {},{}", point.x, point.y).ok(),
            None => write!(line, "miss @ {},{}", point.x, point.y).ok(),
        };
        self.push(&line);
    }

    /// Iterate over log lines (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Number of lines in the log.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Whether the log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for TouchLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_log_push() {
        let mut log = TouchLog::new();
        assert!(log.is_empty());

        log.push("First touch");
        assert_eq!(log.len(), 1);

        log.push("Second touch");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_touch_log_ring_buffer() {
        let mut log = TouchLog::new();
        for msg in ["0", "1", "2"] {
            log.push(msg);
        }
        assert_eq!(log.len(), LOG_LINES);

        // Push one more - should drop oldest
        log.push("3");
        assert_eq!(log.len(), LOG_LINES);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_touch_log_truncation() {
        let mut log = TouchLog::new();
        log.push("This is a very long message that exceeds the panel line capacity");

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
    }

    #[test]
    fn test_push_touch_formats_hit_and_miss() {
        let mut log = TouchLog::new();
        log.push_touch(Point::new(120, 140), Some("Plus"));
        log.push_touch(Point::new(-3, 7), None);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["Plus @ 120,140", "miss @ -3,7"]);
    }
}
