//! Booking form component
//!
//! Four labelled fields, a submit and a back button, and the confirmation
//! popup shown once a record has been handed to the history.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{
        form::{BookingFormState, FormField, FormFocus, FormPhase},
        AppState,
    },
    domain::booking::BookingRecord,
    presentation::{
        config::styles::Styles,
        widgets::{
            button::{ButtonWidget, BUTTON_HEIGHT},
            text_field::{TextFieldWidget, TEXT_FIELD_HEIGHT},
        },
    },
};

const SUBMIT_LABEL: &str = "Book now";
const BACK_LABEL: &str = "Back";

/// Booking form component
#[derive(Debug, Clone, Default)]
pub struct BookingFormComponent;

impl BookingFormComponent {
    pub fn new() -> Self {
        Self
    }

    /// Renders nothing unless a form is on screen
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(form) = state.nav.form() else {
            return;
        };
        let styles = &state.config.config.styles;

        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(FormField::ALL.iter().map(|_| Constraint::Length(TEXT_FIELD_HEIGHT)));
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let header = Paragraph::new(Line::from(Span::styled(
            format!("Booking {}", form.sport_type()),
            styles.style("title"),
        )));
        frame.render_widget(header, chunks[0]);

        for (field, chunk) in FormField::ALL.iter().zip(chunks.iter().skip(1)) {
            let widget = TextFieldWidget::new(field.label(), form.field(*field))
                .placeholder(field.placeholder())
                .focused(!form.is_confirming() && form.focused_field() == Some(*field))
                .focused_style(styles.style("focused"))
                .placeholder_style(styles.style("placeholder"));
            frame.render_widget(widget, *chunk);
        }

        self.view_buttons(form, styles, frame, chunks[1 + FormField::ALL.len()]);

        if let FormPhase::Submitted(record) = form.phase() {
            self.view_confirmation(record, styles, frame, area);
        }
    }

    fn view_buttons(&self, form: &BookingFormState, styles: &Styles, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let editing = !form.is_confirming();

        let submit = ButtonWidget::new(SUBMIT_LABEL)
            .enabled(form.can_submit())
            .focused(editing && form.focus == FormFocus::SubmitButton)
            .style(styles.style("button"))
            .disabled_style(styles.style("button_disabled"));
        frame.render_widget(submit, columns[0]);

        let back = ButtonWidget::new(BACK_LABEL)
            .focused(editing && form.focus == FormFocus::BackButton)
            .style(styles.style("button"));
        frame.render_widget(back, columns[1]);
    }

    fn view_confirmation(
        &self,
        record: &BookingRecord,
        styles: &Styles,
        frame: &mut Frame,
        area: Rect,
    ) {
        let summary = record.to_string();
        let width = (summary.chars().count() as u16 + 4).clamp(30, area.width.max(1));
        let popup = centered_rect(width, 7, area);

        let block = Block::default()
            .title(Span::styled("Booking confirmed!", styles.style("title")))
            .borders(Borders::ALL)
            .border_type(BorderType::Double);
        let body = Paragraph::new(vec![
            Line::from(format!("{} court booked!", record.sport_type)),
            Line::from(Span::styled(summary, styles.style("subtitle"))),
            Line::default(),
            Line::from(Span::styled("[ OK ]", styles.style("button").add_modifier(Modifier::REVERSED))),
        ])
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(Clear, popup);
        frame.render_widget(body, popup);
    }
}

/// `width` x `height` rectangle centred in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use crate::{
        core::{
            msg::{form::FormMsg, navigation::NavMsg},
            textarea_engine::NoopTextAreaEngine,
        },
        infrastructure::config::Config,
        test_helpers::buffer_lines,
    };

    fn state_on_form(sport: &str) -> AppState {
        let mut state = AppState::new_with_config(Config::embedded().unwrap_or_default());
        state.nav.update(NavMsg::OpenBookingForm(sport.to_string()));
        state
    }

    fn fill(state: &mut AppState, values: [&str; 4]) {
        if let Some(form) = state.nav.form_mut() {
            for (field, value) in FormField::ALL.iter().zip(values) {
                form.update(FormMsg::SetField(*field, value.to_string()), &NoopTextAreaEngine);
            }
        }
    }

    fn render(state: &AppState) -> (Vec<String>, Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                BookingFormComponent::new().view(state, f, area)
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (buffer_lines(&buffer), buffer)
    }

    #[test]
    fn test_nothing_rendered_off_form() {
        let state = AppState::new_with_config(Config::embedded().unwrap_or_default());
        let (lines, _) = render(&state);
        assert!(lines.iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn test_header_and_labels() {
        let (lines, _) = render(&state_on_form("Futsal"));
        let screen = lines.join("\n");
        assert!(lines[0].starts_with("Booking Futsal"));
        for field in FormField::ALL {
            assert!(screen.contains(field.label()), "missing {}", field.label());
        }
        assert!(screen.contains("e.g. 31/12/2023"));
        assert!(screen.contains(SUBMIT_LABEL));
        assert!(screen.contains(BACK_LABEL));
    }

    #[test]
    fn test_unknown_sport_shown_verbatim() {
        let (lines, _) = render(&state_on_form("Curling"));
        assert!(lines[0].starts_with("Booking Curling"));
    }

    #[test]
    fn test_duration_starts_at_one() {
        let (lines, _) = render(&state_on_form("Futsal"));
        // Duration is the third field: header (2) + two fields (6) + top border
        assert!(lines[9].starts_with("│1"));
    }

    #[test]
    fn test_submit_button_disabled_until_valid() {
        let mut state = state_on_form("Futsal");
        let button_row = 2 + 4 * TEXT_FIELD_HEIGHT + 1;
        let disabled = state.config.config.styles.style("button_disabled");

        // Any cell inside the submit button carries its style
        let (_, buffer) = render(&state);
        assert_eq!(buffer[(2, button_row)].fg, disabled.fg.unwrap_or(Color::Reset));

        fill(&mut state, ["31/12/2023", "14:30", "2", "Andi"]);
        let (_, buffer) = render(&state);
        let enabled = state.config.config.styles.style("button");
        assert_eq!(buffer[(2, button_row)].bg, enabled.bg.unwrap_or(Color::Reset));
    }

    #[test]
    fn test_confirmation_popup() {
        let mut state = state_on_form("Futsal");
        fill(&mut state, ["31/12/2023", "14:30", "2", "Andi"]);
        if let Some(form) = state.nav.form_mut() {
            assert!(form.submit().is_some());
        }

        let (lines, _) = render(&state);
        let screen = lines.join("\n");
        assert!(screen.contains("Booking confirmed!"));
        assert!(screen.contains("Futsal court booked!"));
        assert!(screen.contains("Futsal on 31/12/2023 at 14:30 (2 hours) for Andi"));
        assert!(screen.contains("[ OK ]"));
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(10, 3, area), Rect::new(5, 1, 10, 3));
        assert_eq!(centered_rect(40, 9, area), area);
    }
}
