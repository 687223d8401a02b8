//! Text buffer with clipboard and snapshot undo.
//!
//! [`TextBuffer`] is the receiver of the editor commands. It is the only
//! component that mutates text: every mutation first pushes the current
//! content onto the history stack, and [`undo`](TextBuffer::undo) pops it
//! back.
//!
//! # Examples
//!
//! ```
//! use patterns_rust::text::{EditEvent, TextBuffer};
//!
//! let mut buf = TextBuffer::new();
//! buf.append("H");
//! buf.append("i");
//! assert_eq!(buf.text(), "Hi");
//! assert_eq!(buf.history(), vec!["", "H"]);
//!
//! buf.undo();
//! buf.undo();
//! assert_eq!(buf.text(), "");
//! assert_eq!(buf.undo(), EditEvent::NothingToUndo);
//! ```

use crate::text::edit_event::EditEvent;
use crate::text::history::History;
use crate::text::rope::RopeWrapper;
use crate::unicode::display_width;
use std::fmt;

const TRACE_TARGET: &str = "patterns::editor";

/// Mutable text with a clipboard and an undo history.
///
/// - **content**: the current text, rope-backed
/// - **clipboard**: the content at the time of the last [`copy`](Self::copy),
///   empty until then
/// - **history**: prior contents, one per [`append`](Self::append) or
///   [`paste`](Self::paste), restored in reverse by [`undo`](Self::undo)
///
/// Redo is not supported; an undone snapshot is discarded.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    content: RopeWrapper,
    clipboard: RopeWrapper,
    history: History,
}

impl TextBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial text and an empty history.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            content: RopeWrapper::from_str(text),
            clipboard: RopeWrapper::new(),
            history: History::new(),
        }
    }

    /// Append text at the end, recording an undo snapshot first.
    ///
    /// Any string is accepted, including the empty string, which still
    /// records a snapshot.
    pub fn append(&mut self, text: &str) {
        self.snapshot();
        self.content.append(text);
        tracing::debug!(
            target: TRACE_TARGET,
            appended_chars = text.chars().count(),
            history_len = self.history.len(),
            "append"
        );
    }

    /// Copy the whole content to the clipboard.
    ///
    /// History is not touched.
    pub fn copy(&mut self) -> EditEvent {
        self.clipboard = self.content.clone();
        let event = EditEvent::Copied {
            text: self.clipboard.to_string(),
        };
        event.emit();
        event
    }

    /// Append the clipboard at the end, recording an undo snapshot first.
    ///
    /// An empty clipboard appends nothing but still records a snapshot, so
    /// undo depth always matches the number of mutating calls.
    pub fn paste(&mut self) -> EditEvent {
        self.snapshot();
        self.content.append_rope(&self.clipboard);
        tracing::debug!(
            target: TRACE_TARGET,
            pasted_chars = self.clipboard.len_chars(),
            history_len = self.history.len(),
            "paste"
        );
        let event = EditEvent::Pasted {
            content: self.content.to_string(),
        };
        event.emit();
        event
    }

    /// Restore the most recent snapshot.
    ///
    /// With an empty history this reports [`EditEvent::NothingToUndo`] and
    /// leaves content and clipboard unchanged.
    pub fn undo(&mut self) -> EditEvent {
        let event = match self.history.pop() {
            Some(previous) => {
                self.content = previous;
                tracing::debug!(
                    target: TRACE_TARGET,
                    history_len = self.history.len(),
                    "undo"
                );
                EditEvent::Undone {
                    content: self.content.to_string(),
                }
            }
            None => EditEvent::NothingToUndo,
        };
        event.emit();
        event
    }

    /// Get the full text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.content.to_string()
    }

    /// Get the clipboard text.
    #[must_use]
    pub fn clipboard(&self) -> String {
        self.clipboard.to_string()
    }

    /// Number of snapshots available to undo.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Check whether [`undo`](Self::undo) would restore anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// The content the next undo would restore, if any.
    #[must_use]
    pub fn undo_preview(&self) -> Option<String> {
        self.history.peek().map(ToString::to_string)
    }

    /// All snapshots, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    /// Check if the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of Unicode scalar values in the content.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.content.len_chars()
    }

    /// Number of grapheme clusters in the content.
    #[must_use]
    pub fn len_graphemes(&self) -> usize {
        self.content.len_graphemes()
    }

    /// Display width of the content in terminal columns.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.content.chunks().map(display_width).sum()
    }

    fn snapshot(&mut self) {
        self.history.push(self.content.clone());
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.content, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.text(), "");
        assert_eq!(buf.clipboard(), "");
        assert_eq!(buf.history_len(), 0);
        assert!(!buf.can_undo());
    }

    #[test]
    fn test_with_text_has_no_history() {
        let buf = TextBuffer::with_text("Hola");
        assert_eq!(buf.text(), "Hola");
        assert!(!buf.can_undo());
    }

    #[test]
    fn test_append_snapshots_before_mutating() {
        let mut buf = TextBuffer::new();
        buf.append("H");
        buf.append("i");
        assert_eq!(buf.text(), "Hi");
        assert_eq!(buf.history(), vec!["", "H"]);
        assert_eq!(buf.undo_preview().as_deref(), Some("H"));
    }

    #[test]
    fn test_append_empty_still_records() {
        let mut buf = TextBuffer::with_text("x");
        buf.append("");
        assert_eq!(buf.text(), "x");
        assert_eq!(buf.history_len(), 1);
    }

    #[test]
    fn test_undo_sequence() {
        let mut buf = TextBuffer::new();
        buf.append("H");
        buf.append("i");

        assert_eq!(
            buf.undo(),
            EditEvent::Undone {
                content: "H".to_string()
            }
        );
        assert_eq!(
            buf.undo(),
            EditEvent::Undone {
                content: String::new()
            }
        );
        assert_eq!(buf.undo(), EditEvent::NothingToUndo);
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_undo_empty_leaves_state() {
        let mut buf = TextBuffer::with_text("keep");
        buf.copy();
        for _ in 0..3 {
            assert_eq!(buf.undo(), EditEvent::NothingToUndo);
        }
        assert_eq!(buf.text(), "keep");
        assert_eq!(buf.clipboard(), "keep");
    }

    #[test]
    fn test_copy_does_not_touch_history() {
        let mut buf = TextBuffer::new();
        buf.append("abc");
        let event = buf.copy();
        assert_eq!(
            event,
            EditEvent::Copied {
                text: "abc".to_string()
            }
        );
        assert_eq!(buf.history_len(), 1);
        assert_eq!(buf.clipboard(), "abc");
    }

    #[test]
    fn test_copy_then_paste_doubles() {
        let mut buf = TextBuffer::with_text("Hola Mundo!");
        buf.copy();
        let event = buf.paste();
        assert_eq!(event.text(), Some("Hola Mundo!Hola Mundo!"));
        assert_eq!(buf.text(), "Hola Mundo!Hola Mundo!");
    }

    #[test]
    fn test_paste_empty_clipboard_records_history() {
        let mut buf = TextBuffer::with_text("abc");
        let event = buf.paste();
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.history_len(), 1);
        assert_eq!(
            event,
            EditEvent::Pasted {
                content: "abc".to_string()
            }
        );
        buf.undo();
        assert_eq!(buf.text(), "abc");
        assert!(!buf.can_undo());
    }

    #[test]
    fn test_clipboard_is_snapshot_not_live() {
        let mut buf = TextBuffer::with_text("a");
        buf.copy();
        buf.append("b");
        buf.paste();
        assert_eq!(buf.text(), "aba");
        assert_eq!(buf.clipboard(), "a");
    }

    #[test]
    fn test_undo_does_not_restore_clipboard() {
        let mut buf = TextBuffer::new();
        buf.append("one");
        buf.copy();
        buf.undo();
        assert_eq!(buf.text(), "");
        assert_eq!(buf.clipboard(), "one");
    }

    #[test]
    fn test_unicode_measures() {
        let mut buf = TextBuffer::new();
        buf.append("Café ");
        buf.append("漢字");
        buf.append("e\u{0301}");
        assert_eq!(buf.len_chars(), 9);
        assert_eq!(buf.len_graphemes(), 8);
        assert_eq!(buf.display_width(), 10);
    }

    #[test]
    fn test_display_matches_text() {
        let mut buf = TextBuffer::new();
        buf.append("Hola");
        assert_eq!(buf.to_string(), buf.text());
    }
}
