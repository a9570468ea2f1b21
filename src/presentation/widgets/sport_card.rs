use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::domain::sport::Sport;

/// Rows taken by one card, borders included
pub const SPORT_CARD_HEIGHT: u16 = 4;

/// Bordered card showing a sport's icon, title and subtitle
#[derive(Debug, Clone)]
pub struct SportCardWidget<'a> {
    sport: &'a Sport,
    highlighted: bool,
    highlight_style: Style,
    subtitle_style: Style,
}

impl<'a> SportCardWidget<'a> {
    pub fn new(sport: &'a Sport) -> Self {
        Self {
            sport,
            highlighted: false,
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
            subtitle_style: Style::default().fg(Color::Gray),
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    pub fn subtitle_style(mut self, style: Style) -> Self {
        self.subtitle_style = style;
        self
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(vec![
                Span::raw(self.sport.icon.glyph()),
                Span::raw(" "),
                Span::styled(self.sport.title, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(self.sport.subtitle, self.subtitle_style)),
        ]
    }
}

impl<'a> Widget for SportCardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (border_type, style) = if self.highlighted {
            (BorderType::Thick, self.highlight_style)
        } else {
            (BorderType::Rounded, Style::default())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .style(style);
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
