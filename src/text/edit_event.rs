//! Outcomes reported by text buffer operations.

use crate::event::emit_event;
use std::fmt;

/// What a buffer operation did.
///
/// Returned by [`TextBuffer`](super::TextBuffer) operations and by the
/// commands that wrap them, and emitted as a notification at the same time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditEvent {
    /// Content was copied to the clipboard.
    Copied { text: String },
    /// Clipboard was appended; `content` is the text after pasting.
    Pasted { content: String },
    /// The latest snapshot was restored; `content` is the text after undo.
    Undone { content: String },
    /// Undo was requested with an empty history. Nothing changed.
    NothingToUndo,
}

impl EditEvent {
    /// Dotted event name used for notifications.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Copied { .. } => "editor.copy",
            Self::Pasted { .. } => "editor.paste",
            Self::Undone { .. } => "editor.undo",
            Self::NothingToUndo => "editor.undo_empty",
        }
    }

    /// True when the operation left the buffer untouched.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NothingToUndo)
    }

    /// Text carried by the event: the copied text or the resulting content.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Copied { text } => Some(text),
            Self::Pasted { content } | Self::Undone { content } => Some(content),
            Self::NothingToUndo => None,
        }
    }

    pub(crate) fn emit(&self) {
        emit_event(self.name(), &self.to_string());
    }
}

impl fmt::Display for EditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied { text } => write!(f, "Copied to clipboard: \"{text}\""),
            Self::Pasted { content } => write!(f, "Text after paste: \"{content}\""),
            Self::Undone { content } => write!(f, "Text after undo: \"{content}\""),
            Self::NothingToUndo => f.write_str("Nothing to undo."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_distinct() {
        let events = [
            EditEvent::Copied { text: String::new() },
            EditEvent::Pasted {
                content: String::new(),
            },
            EditEvent::Undone {
                content: String::new(),
            },
            EditEvent::NothingToUndo,
        ];
        let mut names: Vec<_> = events.iter().map(EditEvent::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_display_quotes_payload() {
        let ev = EditEvent::Undone {
            content: "Hola".to_string(),
        };
        assert_eq!(ev.to_string(), "Text after undo: \"Hola\"");
        assert_eq!(ev.text(), Some("Hola"));
        assert!(!ev.is_noop());
    }

    #[test]
    fn test_nothing_to_undo_is_noop() {
        assert!(EditEvent::NothingToUndo.is_noop());
        assert_eq!(EditEvent::NothingToUndo.text(), None);
    }
}
