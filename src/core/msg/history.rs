use serde::{Deserialize, Serialize};

/// Messages for the history screen. Records are only added by a form submit,
/// never through a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryMsg {
    ScrollUp,
    ScrollDown,
}
