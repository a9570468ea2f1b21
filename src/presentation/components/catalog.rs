//! Catalog component
//!
//! Home screen: greeting header, search field and the filtered sport cards.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::widgets::{
        sport_card::{SportCardWidget, SPORT_CARD_HEIGHT},
        text_field::{TextFieldWidget, TEXT_FIELD_HEIGHT},
    },
};

/// Catalog component
///
/// Stateless: the query, focus and cursor all live in `CatalogState`.
#[derive(Debug, Clone, Default)]
pub struct CatalogComponent;

impl CatalogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                 // Greeting
                Constraint::Length(TEXT_FIELD_HEIGHT), // Search
                Constraint::Length(1),                 // Section title
                Constraint::Min(0),                    // Cards
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Welcome, {}", state.config.config.profile_name),
                styles.style("title"),
            )),
            Line::from(Span::styled("What sport today?", styles.style("subtitle"))),
        ]);
        frame.render_widget(header, chunks[0]);

        let search = TextFieldWidget::new("Search", &state.catalog.query)
            .placeholder(Some("Search sports"))
            .focused(state.catalog.search_focused)
            .focused_style(styles.style("focused"))
            .placeholder_style(styles.style("placeholder"));
        frame.render_widget(search, chunks[1]);

        frame.render_widget(
            Paragraph::new(Span::styled("Choose a sport", styles.style("title"))),
            chunks[2],
        );

        self.view_cards(state, frame, chunks[3]);
    }

    fn view_cards(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let sports = state.catalog.filtered();
        if sports.is_empty() {
            let empty = Paragraph::new(format!("No sports match \"{}\"", state.catalog.query()))
                .style(styles.style("placeholder"))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let cursor = state.catalog.cursor();
        let first = first_visible(cursor, visible_count(area.height, SPORT_CARD_HEIGHT));
        // The cursor only shows while the list, not the search field, has focus
        let show_cursor = !state.catalog.search_focused;

        let mut y = area.y;
        for (index, sport) in sports.iter().enumerate().skip(first) {
            if y + SPORT_CARD_HEIGHT > area.bottom() {
                break;
            }
            let card = SportCardWidget::new(sport)
                .highlighted(show_cursor && index == cursor)
                .highlight_style(styles.style("highlight"))
                .subtitle_style(styles.style("subtitle"));
            frame.render_widget(card, Rect::new(area.x, y, area.width, SPORT_CARD_HEIGHT));
            y += SPORT_CARD_HEIGHT;
        }
    }
}

/// How many items of `item_height` rows fit in `height` rows, at least one
pub(crate) fn visible_count(height: u16, item_height: u16) -> usize {
    usize::from((height / item_height.max(1)).max(1))
}

/// First index to draw so that `cursor` stays inside a window of `visible` items
pub(crate) fn first_visible(cursor: usize, visible: usize) -> usize {
    (cursor + 1).saturating_sub(visible.max(1))
}
