//! `patterns` - undoable editor commands and a composite menu tree
//!
//! Two independent pieces built on uniform interfaces:
//!
//! - [`text`] and [`command`]: a rope-backed [`TextBuffer`] with clipboard and
//!   snapshot undo, driven through [`Command`] objects that a [`Dispatcher`]
//!   invokes by label.
//! - [`menu`]: a restaurant-style menu where items and categories render
//!   uniformly through recursion.
//!
//! Operations report what they did as values ([`EditEvent`], [`Dispatch`])
//! and as notifications through [`event`].

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow MenuNode in menu, etc.
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // RefCell borrows in commands
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for owned names
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod command;
pub mod error;
pub mod event;
pub mod menu;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};

// Re-export editor types
pub use command::{Command, CopyCommand, Dispatch, Dispatcher, PasteCommand, UndoCommand};
pub use text::{EditEvent, TextBuffer};

// Re-export menu types
pub use menu::{MenuCategory, MenuItem, MenuNode, RenderOptions};
