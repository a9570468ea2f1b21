use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::state::form::{FormField, FormFocus};

/// Booking form messages. Ignored when no form is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMsg {
    FocusNext,
    FocusPrev,
    Focus(FormFocus),

    /// Editing key for the focused field, applied through the text-area engine
    ProcessInput(KeyEvent),
    Paste(String),
    /// Replace a field's whole content
    SetField(FormField, String),

    /// Enter on the focused element: next field, submit, or back
    Activate,
    Submit,
    DismissConfirmation,
}
