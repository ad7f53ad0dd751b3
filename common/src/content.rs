//! Panel content storage.
//!
//! Text is kept in fixed-capacity `heapless` buffers so a panel never
//! allocates. Input that does not fit is truncated on a character boundary,
//! the same way a full ring buffer drops what it cannot hold.
//!
//! [`Content`] is the resolved view the renderer dispatches on. It is computed
//! from the stored text and image, with the image taking precedence.

use heapless::{String, Vec};
use log::warn;

/// Maximum number of text lines on one panel.
pub const MAX_LINES: usize = 8;

/// Maximum bytes per text line.
pub const LINE_CAPACITY: usize = 32;

/// Maximum bytes for a panel name or tag.
pub const LABEL_CAPACITY: usize = 24;

/// One line of panel text.
pub type TextLine = String<LINE_CAPACITY>;

/// All text lines of a panel, in display order.
pub type TextLines = Vec<TextLine, MAX_LINES>;

/// Name or tag string.
pub type Label = String<LABEL_CAPACITY>;

/// What a panel renders on top of its background.
pub enum Content<'c, I> {
    /// Background only.
    Empty,
    /// One line, centered in the panel.
    SingleLine(&'c str),
    /// Two or more lines stacked and centered as a block.
    MultiLine(&'c [TextLine]),
    /// An image at the panel origin. Any text is ignored.
    Image(&'c I),
}

impl<'c, I> Content<'c, I> {
    /// Pick the variant for a panel holding `image` and `lines`.
    pub fn resolve(
        image: Option<&'c I>,
        lines: &'c [TextLine],
    ) -> Self {
        match (image, lines) {
            (Some(image), _) => Self::Image(image),
            (None, []) => Self::Empty,
            (None, [line]) => Self::SingleLine(line.as_str()),
            (None, lines) => Self::MultiLine(lines),
        }
    }

    /// Whether nothing beyond the background is drawn.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Copy as much of `text` as fits into a bounded string.
///
/// Returns the copy and whether anything was cut off.
pub fn bounded<const N: usize>(text: &str) -> (String<N>, bool) {
    let mut out: String<N> = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            return (out, true);
        }
    }
    (out, false)
}

/// Build a label, truncating to [`LABEL_CAPACITY`].
pub fn label(text: &str) -> Label {
    let (label, truncated) = bounded(text);
    if truncated {
        warn!("label truncated to {} bytes: {}", LABEL_CAPACITY, label.as_str());
    }
    label
}

/// Append a line to `lines`, truncating it to [`LINE_CAPACITY`].
///
/// Returns `false` and leaves `lines` unchanged when all [`MAX_LINES`] are
/// already in use.
pub fn push_line(
    lines: &mut TextLines,
    text: &str,
) -> bool {
    let (line, truncated) = bounded(text);
    if truncated {
        warn!("text line truncated to {} bytes: {}", LINE_CAPACITY, line.as_str());
    }
    if lines.push(line).is_err() {
        warn!("panel already holds {} lines, dropping: {}", MAX_LINES, text);
        return false;
    }
    true
}
