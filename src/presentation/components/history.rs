//! Booking history component
//!
//! Read-only list of the session's bookings in the order they were made.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::widgets::booking_item::{BookingItemWidget, BOOKING_ITEM_HEIGHT},
};

pub const EMPTY_MESSAGE: &str = "No booking history yet";

#[derive(Debug, Clone, Default)]
pub struct HistoryComponent;

impl HistoryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let mut title = vec![Span::styled("Booking History", styles.style("title"))];
        if !state.history.is_empty() {
            title.push(Span::styled(
                format!(" ({})", state.history.len()),
                styles.style("subtitle"),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

        if state.history.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(styles.style("placeholder"))
                .alignment(Alignment::Center);
            frame.render_widget(empty, chunks[1]);
            return;
        }

        let list = chunks[1];
        let mut y = list.y;
        for record in state.history.visible_records() {
            if y + BOOKING_ITEM_HEIGHT > list.bottom() {
                break;
            }
            let item = BookingItemWidget::new(record).title_style(styles.style("title"));
            frame.render_widget(item, Rect::new(list.x, y, list.width, BOOKING_ITEM_HEIGHT));
            y += BOOKING_ITEM_HEIGHT;
        }
    }
}
