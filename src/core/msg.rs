use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod form;
pub mod history;
pub mod navigation;
pub mod system;

use catalog::CatalogMsg;
use form::FormMsg;
use history::HistoryMsg;
use navigation::NavMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Screen transitions (delegated to NavigationState)
    Nav(NavMsg),

    // Home screen: search and sport selection
    Catalog(CatalogMsg),

    // Booking form on the current screen
    Form(FormMsg),

    // Shared booking history
    History(HistoryMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}
