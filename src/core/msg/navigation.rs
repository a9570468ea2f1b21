use serde::{Deserialize, Serialize};

/// Screen transitions handled by the navigation controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    /// A sport was selected on the home screen; carries its title verbatim
    OpenBookingForm(String),
    /// The profile control was activated on the home screen
    OpenHistory,
    /// Leave the current screen and return home
    Back,
}
