use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Home screen messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogMsg {
    FocusSearch,
    BlurSearch,
    /// Editing key for the search field, applied through the text-area engine
    ProcessSearchInput(KeyEvent),
    PasteSearch(String),
    /// Replace the whole query
    SetQuery(String),
    ClearQuery,

    CursorUp,
    CursorDown,

    /// Book the highlighted sport
    SelectHighlighted,
    ProfileClicked,
}
