use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Rows taken by a button, borders included
pub const BUTTON_HEIGHT: u16 = 3;

/// Bordered, centred label. A disabled button keeps its label but is drawn
/// with the disabled style and never looks focused.
#[derive(Debug, Clone)]
pub struct ButtonWidget<'a> {
    label: &'a str,
    enabled: bool,
    focused: bool,
    style: Style,
    disabled_style: Style,
}

impl<'a> ButtonWidget<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            focused: false,
            style: Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
            disabled_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    pub fn effective_style(&self) -> Style {
        match (self.enabled, self.focused) {
            (false, _) => self.disabled_style,
            (true, true) => self.style.add_modifier(Modifier::REVERSED),
            (true, false) => self.style,
        }
    }
}

impl<'a> Widget for ButtonWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_type = if self.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type);
        Paragraph::new(self.label)
            .style(self.effective_style())
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
