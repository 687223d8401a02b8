//! Grapheme cluster counting over ropes.

use ropey::Rope;
use unicode_segmentation::{GraphemeCursor, GraphemeIncomplete};

/// Count user-perceived characters in a rope.
///
/// Walks the rope chunk by chunk with a [`GraphemeCursor`], so clusters that
/// straddle a chunk boundary count once and no contiguous copy is made.
#[must_use]
pub fn grapheme_count(rope: &Rope) -> usize {
    let len = rope.len_bytes();
    let mut cursor = GraphemeCursor::new(0, len, true);
    let (mut chunk, mut chunk_start, _, _) = rope.chunk_at_byte(0);
    let mut count = 0;

    loop {
        match cursor.next_boundary(chunk, chunk_start) {
            Ok(Some(_)) => count += 1,
            Ok(None) => return count,
            Err(GraphemeIncomplete::NextChunk) => {
                chunk_start += chunk.len();
                chunk = rope.chunk_at_byte(chunk_start).0;
            }
            Err(GraphemeIncomplete::PreContext(n)) => {
                let context = rope.chunk_at_byte(n - 1).0;
                cursor.provide_context(context, n - context.len());
            }
            // Forward scans from offset zero never ask for earlier chunks
            Err(_) => return count,
        }
    }
}
