//! Concrete editor commands.

use crate::command::trait_def::Command;
use crate::text::{EditEvent, TextBuffer};
use std::cell::RefCell;

/// Copy the whole buffer to its clipboard.
#[derive(Clone, Copy, Debug)]
pub struct CopyCommand<'a> {
    buffer: &'a RefCell<TextBuffer>,
}

impl<'a> CopyCommand<'a> {
    /// Create a copy command bound to `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a RefCell<TextBuffer>) -> Self {
        Self { buffer }
    }

    /// The buffer this command targets.
    #[must_use]
    pub const fn buffer(&self) -> &'a RefCell<TextBuffer> {
        self.buffer
    }
}

impl Command for CopyCommand<'_> {
    fn execute(&self) -> EditEvent {
        self.buffer.borrow_mut().copy()
    }

    fn description(&self) -> String {
        "Copy".to_string()
    }
}

/// Append the clipboard to the buffer.
#[derive(Clone, Copy, Debug)]
pub struct PasteCommand<'a> {
    buffer: &'a RefCell<TextBuffer>,
}

impl<'a> PasteCommand<'a> {
    /// Create a paste command bound to `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a RefCell<TextBuffer>) -> Self {
        Self { buffer }
    }

    /// The buffer this command targets.
    #[must_use]
    pub const fn buffer(&self) -> &'a RefCell<TextBuffer> {
        self.buffer
    }
}

impl Command for PasteCommand<'_> {
    fn execute(&self) -> EditEvent {
        self.buffer.borrow_mut().paste()
    }

    fn description(&self) -> String {
        "Paste".to_string()
    }
}

/// Restore the buffer's previous content.
#[derive(Clone, Copy, Debug)]
pub struct UndoCommand<'a> {
    buffer: &'a RefCell<TextBuffer>,
}

impl<'a> UndoCommand<'a> {
    /// Create an undo command bound to `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a RefCell<TextBuffer>) -> Self {
        Self { buffer }
    }

    /// The buffer this command targets.
    #[must_use]
    pub const fn buffer(&self) -> &'a RefCell<TextBuffer> {
        self.buffer
    }
}

impl Command for UndoCommand<'_> {
    fn execute(&self) -> EditEvent {
        self.buffer.borrow_mut().undo()
    }

    fn description(&self) -> String {
        "Undo".to_string()
    }
}
