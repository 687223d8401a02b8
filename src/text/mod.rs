//! Text storage with clipboard and snapshot-based undo.
//!
//! Key types:
//!
//! - [`TextBuffer`]: the editor receiver (append, copy, paste, undo)
//! - [`EditEvent`]: what each operation did, returned and emitted
//! - [`RopeWrapper`]: rope storage shared by content, clipboard and history
//!
//! # Examples
//!
//! ```
//! use patterns_rust::TextBuffer;
//!
//! let mut editor = TextBuffer::new();
//! editor.append("Hola");
//! editor.copy();
//! editor.paste();
//! assert_eq!(editor.text(), "HolaHola");
//!
//! editor.undo();
//! assert_eq!(editor.text(), "Hola");
//! ```

mod buffer;
mod edit_event;
mod history;
mod rope;

pub use buffer::TextBuffer;
pub use edit_event::EditEvent;
pub use rope::RopeWrapper;
