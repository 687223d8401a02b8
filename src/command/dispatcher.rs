//! Dispatcher - label-keyed command slots.

use crate::command::trait_def::Command;
use crate::event::{LogLevel, emit_log};
use crate::text::EditEvent;
use std::collections::HashMap;
use std::fmt;

const TRACE_TARGET: &str = "patterns::dispatch";

/// Result of invoking a label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A command was bound and ran; carries its outcome.
    Executed(EditEvent),
    /// No command is bound to `label`. Nothing ran.
    Unbound { label: String },
}

impl Dispatch {
    /// True if a command ran.
    #[must_use]
    pub const fn is_executed(&self) -> bool {
        matches!(self, Self::Executed(_))
    }

    /// Outcome of the command that ran, if any.
    #[must_use]
    pub const fn event(&self) -> Option<&EditEvent> {
        match self {
            Self::Executed(event) => Some(event),
            Self::Unbound { .. } => None,
        }
    }
}

/// Maps labels (toolbar buttons, key names) to commands.
///
/// Each label holds at most one command; binding a label again replaces the
/// previous command. Invoking a label without a command is reported as
/// [`Dispatch::Unbound`] and logged, never a panic.
#[derive(Default)]
pub struct Dispatcher<'a> {
    slots: HashMap<String, Box<dyn Command + 'a>>,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Bind `command` to `label`, returning the command it replaced.
    pub fn bind<C>(&mut self, label: impl Into<String>, command: C) -> Option<Box<dyn Command + 'a>>
    where
        C: Command + 'a,
    {
        self.bind_boxed(label, Box::new(command))
    }

    /// Bind an already boxed command to `label`, returning the command it replaced.
    pub fn bind_boxed(
        &mut self,
        label: impl Into<String>,
        command: Box<dyn Command + 'a>,
    ) -> Option<Box<dyn Command + 'a>> {
        let label = label.into();
        tracing::debug!(
            target: TRACE_TARGET,
            label = %label,
            command = %command.description(),
            "bind"
        );
        self.slots.insert(label, command)
    }

    /// Remove the command bound to `label`.
    pub fn unbind(&mut self, label: &str) -> Option<Box<dyn Command + 'a>> {
        self.slots.remove(label)
    }

    /// Run the command bound to `label`.
    ///
    /// An unbound label is reported once, as an error through
    /// [`emit_log`]; no edit notification is emitted for it.
    pub fn invoke(&self, label: &str) -> Dispatch {
        match self.slots.get(label) {
            Some(command) => {
                tracing::debug!(
                    target: TRACE_TARGET,
                    label = %label,
                    command = %command.description(),
                    "invoke"
                );
                Dispatch::Executed(command.execute())
            }
            None => {
                let message = format!("No command bound to label \"{label}\"");
                emit_log(LogLevel::Error, &message);
                Dispatch::Unbound {
                    label: label.to_string(),
                }
            }
        }
    }

    /// Check whether `label` has a command.
    #[must_use]
    pub fn is_bound(&self, label: &str) -> bool {
        self.slots.contains_key(label)
    }

    /// Description of the command bound to `label`.
    #[must_use]
    pub fn description(&self, label: &str) -> Option<String> {
        self.slots.get(label).map(|command| command.description())
    }

    /// All bound labels, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// Number of bound labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no label is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("labels", &self.labels())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CopyCommand, PasteCommand, UndoCommand};
    use crate::text::TextBuffer;
    use std::cell::{Cell, RefCell};

    // Counts executions without touching a buffer
    struct CountingCommand<'a> {
        name: &'static str,
        runs: &'a Cell<u32>,
    }

    impl Command for CountingCommand<'_> {
        fn execute(&self) -> EditEvent {
            self.runs.set(self.runs.get() + 1);
            EditEvent::NothingToUndo
        }

        fn description(&self) -> String {
            self.name.to_string()
        }
    }

    #[test]
    fn test_bind_and_invoke() {
        let buffer = RefCell::new(TextBuffer::with_text("x"));
        let mut dispatcher = Dispatcher::new();
        assert!(dispatcher.bind("copy", CopyCommand::new(&buffer)).is_none());

        let result = dispatcher.invoke("copy");
        assert!(result.is_executed());
        assert_eq!(result.event().and_then(EditEvent::text), Some("x"));
        assert_eq!(buffer.borrow().clipboard(), "x");
    }

    #[test]
    fn test_rebind_last_write_wins() {
        let first = Cell::new(0);
        let second = Cell::new(0);
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind(
            "go",
            CountingCommand {
                name: "first",
                runs: &first,
            },
        );
        let replaced = dispatcher.bind(
            "go",
            CountingCommand {
                name: "second",
                runs: &second,
            },
        );
        assert_eq!(replaced.map(|c| c.description()).as_deref(), Some("first"));
        assert_eq!(dispatcher.len(), 1);

        dispatcher.invoke("go");
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(dispatcher.description("go").as_deref(), Some("second"));
    }

    #[test]
    fn test_invoke_unbound_reports() {
        let buffer = RefCell::new(TextBuffer::with_text("same"));
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind("paste", PasteCommand::new(&buffer));

        let result = dispatcher.invoke("cut");
        assert_eq!(
            result,
            Dispatch::Unbound {
                label: "cut".to_string()
            }
        );
        assert!(result.event().is_none());
        assert_eq!(buffer.borrow().text(), "same");
        assert_eq!(buffer.borrow().history_len(), 0);
    }

    #[test]
    fn test_unbind() {
        let buffer = RefCell::new(TextBuffer::new());
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind("undo", UndoCommand::new(&buffer));
        assert!(dispatcher.is_bound("undo"));
        assert!(dispatcher.unbind("undo").is_some());
        assert!(!dispatcher.is_bound("undo"));
        assert!(dispatcher.is_empty());
        assert!(!dispatcher.invoke("undo").is_executed());
    }

    #[test]
    fn test_labels_sorted() {
        let buffer = RefCell::new(TextBuffer::new());
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind("undo", UndoCommand::new(&buffer));
        dispatcher.bind("copy", CopyCommand::new(&buffer));
        dispatcher.bind_boxed("paste", Box::new(PasteCommand::new(&buffer)));
        assert_eq!(dispatcher.labels(), vec!["copy", "paste", "undo"]);
        assert!(format!("{dispatcher:?}").contains("paste"));
    }
}
