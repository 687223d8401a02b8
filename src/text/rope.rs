//! Rope wrapper using the ropey crate.
//!
//! Cloning a [`RopeWrapper`] shares the underlying tree nodes, so taking a
//! snapshot of the buffer for the undo history is cheap regardless of the
//! document size.

use crate::unicode::grapheme_count;
use ropey::Rope;
use std::fmt;

/// Wrapper around `ropey::Rope` with append-oriented helpers.
#[derive(Clone, Debug, Default)]
pub struct RopeWrapper {
    rope: Rope,
}

impl RopeWrapper {
    /// Create an empty rope.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a rope from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of grapheme clusters.
    #[must_use]
    pub fn len_graphemes(&self) -> usize {
        grapheme_count(&self.rope)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Append text to the end.
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let len = self.len_chars();
        self.rope.insert(len, text);
    }

    /// Append another rope to the end, sharing its nodes.
    pub fn append_rope(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        self.rope.append(other.rope.clone());
    }

    /// Iterate over the text chunks without allocating.
    pub fn chunks(&self) -> impl Iterator<Item = &str> {
        self.rope.chunks()
    }
}

impl fmt::Display for RopeWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl PartialEq for RopeWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.rope == other.rope
    }
}

impl Eq for RopeWrapper {}

impl PartialEq<&str> for RopeWrapper {
    fn eq(&self, other: &&str) -> bool {
        self.rope == *other
    }
}
