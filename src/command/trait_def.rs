//! Command trait definition.

use crate::text::EditEvent;

/// A single operation bound to its receiver.
///
/// The invoker only sees `execute()`; which buffer method runs, and on
/// which buffer, is fixed when the command is constructed. Commands never
/// validate buffer state: they forward unconditionally and hand back the
/// receiver's outcome.
///
/// # Example
///
/// ```
/// use patterns_rust::command::Command;
/// use patterns_rust::text::{EditEvent, TextBuffer};
/// use std::cell::RefCell;
///
/// struct TypeAndCopyCommand<'a> {
///     buffer: &'a RefCell<TextBuffer>,
///     text: String,
/// }
///
/// impl Command for TypeAndCopyCommand<'_> {
///     fn execute(&self) -> EditEvent {
///         let mut buffer = self.buffer.borrow_mut();
///         buffer.append(&self.text);
///         buffer.copy()
///     }
///
///     fn description(&self) -> String {
///         format!("Type and copy {:?}", self.text)
///     }
/// }
///
/// let editor = RefCell::new(TextBuffer::new());
/// let cmd = TypeAndCopyCommand { buffer: &editor, text: "Hola".to_string() };
/// cmd.execute();
/// assert_eq!(editor.borrow().clipboard(), "Hola");
/// ```
pub trait Command {
    /// Run the operation against the bound receiver.
    fn execute(&self) -> EditEvent;

    /// Human-readable name, e.g. for a toolbar tooltip.
    fn description(&self) -> String;
}
