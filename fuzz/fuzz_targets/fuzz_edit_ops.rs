//! Fuzz target for buffer operation sequences.
//!
//! Applies arbitrary append/copy/paste/undo sequences and checks that the
//! history depth always equals the number of unreverted mutations.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use patterns_rust::TextBuffer;

#[derive(Arbitrary, Debug)]
enum Op {
    Append(String),
    Copy,
    Paste,
    Undo,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut buf = TextBuffer::new();
    let mut depth = 0usize;

    for op in &ops {
        match op {
            Op::Append(text) => {
                let before = buf.text();
                buf.append(text);
                depth += 1;
                assert_eq!(buf.text(), format!("{before}{text}"));
            }
            Op::Copy => {
                buf.copy();
                assert_eq!(buf.clipboard(), buf.text());
            }
            Op::Paste => {
                let expected = format!("{}{}", buf.text(), buf.clipboard());
                buf.paste();
                depth += 1;
                assert_eq!(buf.text(), expected);
            }
            Op::Undo => {
                let expected = buf.undo_preview();
                let event = buf.undo();
                match expected {
                    Some(previous) => {
                        depth -= 1;
                        assert_eq!(buf.text(), previous);
                    }
                    None => assert!(event.is_noop()),
                }
            }
        }
        assert_eq!(buf.history_len(), depth);
    }
});
