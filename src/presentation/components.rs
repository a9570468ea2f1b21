//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.
//! The root dispatches on the current screen and always draws the status bar.

use ratatui::prelude::*;

use crate::core::state::{navigation::Screen, AppState};

pub mod booking_form;
pub mod catalog;
pub mod history;
pub mod status_bar;

pub use booking_form::BookingFormComponent;
pub use catalog::CatalogComponent;
pub use history::HistoryComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub catalog: CatalogComponent,
    pub booking_form: BookingFormComponent,
    pub history: HistoryComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Screen
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());
        let content = layout[0].inner(Margin::new(1, 0));

        match state.screen() {
            Screen::Main => self.catalog.view(state, frame, content),
            Screen::BookingForm(_) => self.booking_form.view(state, frame, content),
            Screen::History => self.history.view(state, frame, content),
        }

        self.status_bar.view(state, frame, layout[1]);
    }
}
