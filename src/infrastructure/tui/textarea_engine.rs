use crossterm::event::{Event, KeyEvent};
use tui_textarea::TextArea;

use crate::core::state::text_area::TextAreaState;
use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::ui::{CursorPosition, TextSelection};

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies the edit, then extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn hydrate(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            snapshot.cursor_position.line as u16,
            snapshot.cursor_position.column as u16,
        ));
        if let Some(sel) = &snapshot.selection {
            Self::restore_selection(&mut textarea, sel);
        }
        textarea
    }

    fn snapshot(textarea: &TextArea<'_>) -> TextAreaState {
        let content = textarea.lines().join("\n");
        let (line, column) = textarea.cursor();
        let selection = textarea
            .selection_range()
            .map(|((sr, sc), (er, ec))| TextSelection {
                start: CursorPosition { line: sr, column: sc },
                end: CursorPosition { line: er, column: ec },
            });
        TextAreaState::new(content, CursorPosition { line, column }, selection)
    }

    fn restore_selection(textarea: &mut TextArea<'_>, selection: &TextSelection) {
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            selection.start.line as u16,
            selection.start.column as u16,
        ));
        textarea.start_selection();
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            selection.end.line as u16,
            selection.end.column as u16,
        ));
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::snapshot(&textarea)
    }

    fn insert_str(&self, snapshot: &TextAreaState, text: &str) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        textarea.insert_str(text);
        Self::snapshot(&textarea)
    }
}
