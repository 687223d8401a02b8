//! Command pattern over a shared [`TextBuffer`](crate::text::TextBuffer).
//!
//! Architecture:
//!
//! - [`Command`]: uniform `execute()` contract
//! - [`CopyCommand`], [`PasteCommand`], [`UndoCommand`]: each bound to one
//!   buffer at construction
//! - [`Dispatcher`]: label-keyed slots that invoke commands by name
//!
//! Control flows one way: dispatcher → command → buffer. Commands borrow the
//! buffer through a `RefCell`, so several commands can target the same
//! buffer and the borrow checker guarantees the buffer outlives them.
//!
//! # Examples
//!
//! ```
//! use patterns_rust::command::{CopyCommand, Dispatch, Dispatcher, PasteCommand};
//! use patterns_rust::TextBuffer;
//! use std::cell::RefCell;
//!
//! let editor = RefCell::new(TextBuffer::with_text("ab"));
//! let mut toolbar = Dispatcher::new();
//! toolbar.bind("copy", CopyCommand::new(&editor));
//! toolbar.bind("paste", PasteCommand::new(&editor));
//!
//! toolbar.invoke("copy");
//! toolbar.invoke("paste");
//! assert_eq!(editor.borrow().text(), "abab");
//!
//! assert!(matches!(toolbar.invoke("bold"), Dispatch::Unbound { .. }));
//! ```

pub mod commands;
pub mod dispatcher;
pub mod trait_def;

pub use commands::{CopyCommand, PasteCommand, UndoCommand};
pub use dispatcher::{Dispatch, Dispatcher};
pub use trait_def::Command;
