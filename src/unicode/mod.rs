//! Unicode utilities for grapheme counting and display width.

mod grapheme;
mod width;

pub use grapheme::grapheme_count;
pub use width::display_width;
