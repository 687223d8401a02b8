//! Undo history as a stack of content snapshots.

use crate::text::rope::RopeWrapper;

/// LIFO stack of prior buffer contents.
///
/// One snapshot is pushed per mutating operation, before the mutation
/// happens. Snapshots are rope clones, which share structure with the live
/// content. There is no depth limit: entries correspond one-to-one with the
/// mutations performed.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    snapshots: Vec<RopeWrapper>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, snapshot: RopeWrapper) {
        self.snapshots.push(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<RopeWrapper> {
        self.snapshots.pop()
    }

    pub(crate) fn peek(&self) -> Option<&RopeWrapper> {
        self.snapshots.last()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Oldest snapshot first.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &RopeWrapper> {
        self.snapshots.iter()
    }
}
