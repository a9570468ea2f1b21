use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::core::state::text_area::TextAreaState;

/// Rows taken by one field, borders included
pub const TEXT_FIELD_HEIGHT: u16 = 3;

/// Single-line labelled input. The focused field draws a block cursor and
/// scrolls horizontally to keep it visible.
#[derive(Debug, Clone)]
pub struct TextFieldWidget<'a> {
    label: &'a str,
    state: &'a TextAreaState,
    placeholder: Option<&'a str>,
    focused: bool,
    focused_style: Style,
    placeholder_style: Style,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(label: &'a str, state: &'a TextAreaState) -> Self {
        Self {
            label,
            state,
            placeholder: None,
            focused: false,
            focused_style: Style::default().fg(Color::Yellow),
            placeholder_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn placeholder(mut self, placeholder: Option<&'a str>) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn focused_style(mut self, style: Style) -> Self {
        self.focused_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// First visible character for a field `width` cells wide
    fn scroll_offset(&self, width: usize) -> usize {
        let cursor = self.state.cursor_position.column;
        if width == 0 {
            return cursor;
        }
        (cursor + 1).saturating_sub(width)
    }

    fn content_line(&self, width: usize) -> Line<'a> {
        if self.state.content.is_empty() {
            let placeholder = self.placeholder.unwrap_or_default();
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::raw(" ").reversed());
            }
            spans.push(Span::styled(placeholder, self.placeholder_style));
            return Line::from(spans);
        }

        let offset = self.scroll_offset(width);
        let visible: Vec<char> = self.state.content.chars().skip(offset).take(width).collect();
        if !self.focused {
            return Line::from(visible.into_iter().collect::<String>());
        }

        let cursor = self.state.cursor_position.column.saturating_sub(offset);
        let before: String = visible.iter().take(cursor).collect();
        let at: String = visible.get(cursor).map(|c| c.to_string()).unwrap_or(" ".into());
        let after: String = visible.iter().skip(cursor + 1).collect();
        Line::from(vec![
            Span::raw(before),
            Span::raw(at).reversed(),
            Span::raw(after),
        ])
    }
}

impl<'a> Widget for TextFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (border_type, border_style) = if self.focused {
            (BorderType::Thick, self.focused_style)
        } else {
            (BorderType::Rounded, Style::default())
        };
        let block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        let width = block.inner(area).width as usize;
        Paragraph::new(self.content_line(width))
            .block(block)
            .render(area, buf);
    }
}
