//! Status bar component
//!
//! Two rows at the bottom of the screen: key hints for the current screen,
//! then the latest error or status message.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{form::FormFocus, navigation::Screen, AppState},
    presentation::config::keybindings::{Action, KeyBindings},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        frame.render_widget(Clear, area);

        let hints = Paragraph::new(self.hints(state)).style(styles.style("subtitle"));
        frame.render_widget(hints, rows[0]);

        // Errors take precedence over status messages
        let message = match (state.system.error_message(), state.system.status_message()) {
            (Some(error), _) => Span::styled(error.as_str(), styles.style("error")),
            (None, Some(status)) => Span::styled(status.as_str(), styles.style("status")),
            (None, None) => Span::raw(""),
        };
        frame.render_widget(Paragraph::new(message), rows[1]);
    }

    /// Key hints for the screen and focus on display
    pub fn hints(&self, state: &AppState) -> String {
        let keys = &state.config.config.keybindings;
        let pairs: Vec<(String, &str)> = match state.screen() {
            Screen::Main if state.catalog.search_focused => {
                vec![("esc".into(), "done"), ("tab".into(), "list")]
            }
            Screen::Main => vec![
                (move_hint(keys), "move"),
                (hint(keys, Action::Select, "enter"), "book"),
                (hint(keys, Action::Search, "/"), "search"),
                (hint(keys, Action::OpenHistory, "p"), "history"),
                (hint(keys, Action::Quit, "q"), "quit"),
            ],
            Screen::BookingForm(form) if form.is_confirming() => {
                vec![("enter".into(), "ok")]
            }
            Screen::BookingForm(form) => {
                let enter = match form.focus {
                    FormFocus::Field(_) => "next",
                    FormFocus::SubmitButton => "book",
                    FormFocus::BackButton => "back",
                };
                vec![
                    ("tab".into(), "next field"),
                    ("enter".into(), enter),
                    ("ctrl-s".into(), "book"),
                    ("esc".into(), "back"),
                ]
            }
            Screen::History => vec![
                (move_hint(keys), "scroll"),
                (hint(keys, Action::Back, "esc"), "back"),
                (hint(keys, Action::Quit, "q"), "quit"),
            ],
        };
        pairs
            .iter()
            .map(|(key, label)| format!("{key}: {label}"))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

fn hint(keys: &KeyBindings, action: Action, fallback: &str) -> String {
    keys.hint_for(action).unwrap_or_else(|| fallback.to_string())
}

fn move_hint(keys: &KeyBindings) -> String {
    format!("{}/{}", hint(keys, Action::Up, "up"), hint(keys, Action::Down, "down"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use crate::{
        core::msg::{navigation::NavMsg, system::SystemMsg},
        infrastructure::config::Config,
        test_helpers::buffer_lines,
    };

    fn embedded_state() -> AppState {
        AppState::new_with_config(Config::embedded().unwrap_or_default())
    }

    fn render(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 2)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                StatusBarComponent::new().view(state, f, area)
            })
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_main_hints_use_configured_keys() {
        let hints = StatusBarComponent::new().hints(&embedded_state());
        assert_eq!(
            hints,
            "k/j: move  enter: book  /: search  p: history  q: quit"
        );
    }

    #[test]
    fn test_hints_fall_back_without_bindings() {
        let hints = StatusBarComponent::new().hints(&AppState::default());
        assert_eq!(
            hints,
            "up/down: move  enter: book  /: search  p: history  q: quit"
        );
    }

    #[test]
    fn test_form_hints_follow_focus() {
        let mut state = embedded_state();
        state.nav.update(NavMsg::OpenBookingForm("Futsal".into()));
        assert!(StatusBarComponent::new().hints(&state).contains("enter: next"));

        if let Some(form) = state.nav.form_mut() {
            form.focus = FormFocus::SubmitButton;
        }
        assert!(StatusBarComponent::new().hints(&state).contains("enter: book"));
    }

    #[test]
    fn test_history_hints() {
        let mut state = embedded_state();
        state.nav.update(NavMsg::OpenHistory);
        assert_eq!(
            StatusBarComponent::new().hints(&state),
            "k/j: scroll  esc: back  q: quit"
        );
    }

    #[test]
    fn test_error_wins_over_status() {
        let mut state = embedded_state();
        state.system.update(SystemMsg::UpdateStatusMessage("Saved".into()));
        assert!(render(&state)[1].starts_with("Saved"));

        state.system.update(SystemMsg::ShowError("boom".into()));
        assert!(render(&state)[1].starts_with("Error: boom"));
    }
}
