//! Host text-display capability trait.
//!
//! The surrounding UI layer is an external collaborator; the engine only
//! needs get/set text, get/set cursor, and style-tag application. Any
//! widget satisfying this trait hosts the engine unchanged; the engine
//! never renders.

use std::ops::Range;

use inkdown_renderer::SpanTag;

use crate::types::RawPosition;

/// Capabilities the engine requires from the host text widget.
///
/// All offsets and ranges are char coordinates into the currently
/// displayed text. Implementations clamp out-of-range input rather than
/// fail; no method here is fallible.
pub trait TextDisplay {
    /// The currently displayed text, `\n`-separated.
    fn text(&self) -> String;

    /// The current cursor position.
    fn cursor(&self) -> RawPosition;

    /// Move the cursor to a `(line, column)` position.
    fn set_cursor(&mut self, position: RawPosition);

    /// Move the cursor to an absolute char offset.
    fn set_cursor_offset(&mut self, offset: usize);

    /// Replace the entire displayed text.
    fn replace_text(&mut self, text: &str);

    /// Apply a named style tag over an absolute char range.
    fn apply_tag(&mut self, tag: SpanTag, range: Range<usize>);

    /// Remove every previously applied style tag.
    fn clear_tags(&mut self);
}

impl<T: TextDisplay + ?Sized> TextDisplay for &mut T {
    fn text(&self) -> String {
        (**self).text()
    }

    fn cursor(&self) -> RawPosition {
        (**self).cursor()
    }

    fn set_cursor(&mut self, position: RawPosition) {
        (**self).set_cursor(position)
    }

    fn set_cursor_offset(&mut self, offset: usize) {
        (**self).set_cursor_offset(offset)
    }

    fn replace_text(&mut self, text: &str) {
        (**self).replace_text(text)
    }

    fn apply_tag(&mut self, tag: SpanTag, range: Range<usize>) {
        (**self).apply_tag(tag, range)
    }

    fn clear_tags(&mut self) {
        (**self).clear_tags()
    }
}
