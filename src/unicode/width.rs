//! Display width calculation for console output.

use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns.
///
/// Ambiguous-width characters count as one column, as POSIX `wcwidth` does.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("- Sopa: 4.99"), 12);
    }

    #[test]
    fn test_accented_width() {
        // Precomposed letters are single-column
        assert_eq!(display_width("Menú Principal"), 14);
        assert_eq!(display_width("Café"), 4);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width("漢字"), 4);
    }

    #[test]
    fn test_ambiguous_is_narrow() {
        // Circled digit one is ambiguous width
        assert_eq!(display_width("\u{2460}"), 1);
    }
}
