pub mod catalog;
pub mod form;
pub mod history;
pub mod navigation;
pub mod system;
pub mod text_area;

use crate::infrastructure::config::Config;

use catalog::CatalogState;
use history::HistoryState;
use navigation::{NavigationState, Screen};
use system::SystemState;

/// Unified application state. This is the navigation controller: it owns the
/// current screen and the booking history shared by the form and history screens.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nav: NavigationState,
    pub catalog: CatalogState,
    pub history: HistoryState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.nav.screen
    }
}
