//! Error types for the pattern library.

use std::fmt;
use std::io;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for library operations.
///
/// Editing and dispatch never fail: their recoverable conditions are
/// reported through [`EditEvent`](crate::text::EditEvent) and
/// [`Dispatch`](crate::command::Dispatch). Errors only arise when building
/// menu nodes or writing a render to an output sink.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing rendered output.
    Io(io::Error),
    /// Menu entry created with an empty name.
    EmptyName,
    /// Menu item price is NaN or infinite.
    InvalidPrice(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::EmptyName => write!(f, "menu entry name must not be empty"),
            Self::InvalidPrice(price) => {
                write!(f, "invalid price: {price} (must be a finite number)")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
