use serde::{Deserialize, Serialize};

/// Canonical cursor position type used across UI domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    /// Cursor placed after the last character of a single-line text
    pub fn end_of(text: &str) -> Self {
        Self {
            line: 0,
            column: text.chars().count(),
        }
    }
}

/// Text selection range within a text buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_counts_chars_not_bytes() {
        assert_eq!(CursorPosition::end_of("abc"), CursorPosition { line: 0, column: 3 });
        assert_eq!(CursorPosition::end_of("é!"), CursorPosition { line: 0, column: 2 });
        assert_eq!(CursorPosition::end_of(""), CursorPosition::default());
    }
}
