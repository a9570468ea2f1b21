use crossterm::event::KeyEvent;

use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::ui::{CursorPosition, TextSelection};

/// Complete state representation of a TextArea component
/// This struct encapsulates all mutable state that needs to be
/// preserved across TextArea recreation in the stateless approach
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
    /// Active text selection range, if any
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    /// Create new TextAreaState
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    /// Create empty TextAreaState
    pub fn empty() -> Self {
        Default::default()
    }

    /// Single-line content with the cursor placed after the last character
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor_position = CursorPosition::end_of(&content);
        Self::new(content, cursor_position, None)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Applies editing keys, refusing any edit that would break the text onto a second line.
    pub fn apply_single_line(&self, engine: &dyn TextAreaEngine, keys: &[KeyEvent]) -> Self {
        let next = engine.apply_keys(self, keys);
        if next.content.contains('\n') {
            self.clone()
        } else {
            next
        }
    }

    /// Inserts pasted text at the cursor; line breaks become spaces.
    pub fn paste_single_line(&self, engine: &dyn TextAreaEngine, text: &str) -> Self {
        let flattened = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        engine.insert_str(self, &flattened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::textarea_engine::NoopTextAreaEngine;

    /// Appends typed characters and turns Enter into a newline
    struct AppendEngine;

    impl TextAreaEngine for AppendEngine {
        fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
            use crossterm::event::KeyCode;
            let mut content = snapshot.content.clone();
            for key in keys {
                match key.code {
                    KeyCode::Char(c) => content.push(c),
                    KeyCode::Enter => content.push('\n'),
                    _ => {}
                }
            }
            TextAreaState::with_content(content)
        }

        fn insert_str(&self, snapshot: &TextAreaState, text: &str) -> TextAreaState {
            TextAreaState::with_content(format!("{}{text}", snapshot.content))
        }
    }

    #[test]
    fn test_with_content_puts_cursor_at_end() {
        let state = TextAreaState::with_content("14:30");
        assert_eq!(state.content(), "14:30");
        assert_eq!(state.cursor_position, CursorPosition { line: 0, column: 5 });
        assert!(state.selection.is_none());
    }

    #[test]
    fn test_apply_single_line_rejects_newlines() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let state = TextAreaState::with_content("ab");
        let typed = state.apply_single_line(
            &AppendEngine,
            &[KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)],
        );
        assert_eq!(typed.content(), "abc");

        let broken = state.apply_single_line(
            &AppendEngine,
            &[KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)],
        );
        assert_eq!(broken, state);
    }

    #[test]
    fn test_paste_single_line_flattens_line_breaks() {
        let state = TextAreaState::with_content("Andi");
        let pasted = state.paste_single_line(&AppendEngine, " Wijaya\r\nJr\n");
        assert_eq!(pasted.content(), "Andi Wijaya Jr ");
    }

    #[test]
    fn test_noop_engine_leaves_state_untouched() {
        let state = TextAreaState::with_content("x");
        assert_eq!(state.paste_single_line(&NoopTextAreaEngine, "y"), state);
    }
}
