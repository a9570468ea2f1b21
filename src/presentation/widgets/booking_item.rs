use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::domain::booking::BookingRecord;

/// Rows taken by one history entry, borders included
pub const BOOKING_ITEM_HEIGHT: u16 = 7;

/// Summary block for one booking: sport heading then the four booking fields
#[derive(Debug, Clone)]
pub struct BookingItemWidget<'a> {
    record: &'a BookingRecord,
    title_style: Style,
}

impl<'a> BookingItemWidget<'a> {
    pub fn new(record: &'a BookingRecord) -> Self {
        Self {
            record,
            title_style: Style::default().add_modifier(Modifier::BOLD),
        }
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(Span::styled(self.record.sport_type.as_str(), self.title_style)),
            Line::from(format!("Date: {}", self.record.date)),
            Line::from(format!("Time: {}", self.record.time)),
            Line::from(format!("Duration: {}", self.record.duration_label())),
            Line::from(format!("Name: {}", self.record.name)),
        ]
    }
}

impl<'a> Widget for BookingItemWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_lines_show_all_fields() {
        let record = BookingRecord::new("Futsal", "31/12/2023", "14:30", 2, "Andi");
        let widget = BookingItemWidget::new(&record);

        assert_eq!(
            text(&widget.lines()),
            vec![
                "Futsal",
                "Date: 31/12/2023",
                "Time: 14:30",
                "Duration: 2 hours",
                "Name: Andi",
            ]
        );
    }

    #[test]
    fn test_single_hour_is_singular() {
        let record = BookingRecord::new("Basket", "01/01/2024", "08:00", 1, "Sari");
        let widget = BookingItemWidget::new(&record);
        assert_eq!(widget.lines()[3].to_string(), "Duration: 1 hour");
    }

    #[test]
    fn test_render_fits_in_item_height() {
        let record = BookingRecord::new("Basket", "01/01/2024", "08:00", 3, "Sari");
        let area = Rect::new(0, 0, 30, BOOKING_ITEM_HEIGHT);
        let mut buf = Buffer::empty(area);
        BookingItemWidget::new(&record).render(area, &mut buf);

        let last_text_row: String = (0..30).map(|x| buf[(x, 5)].symbol()).collect();
        assert!(last_text_row.contains("Name: Sari"));
        assert_eq!(buf[(0, 6)].symbol(), "╰");
    }
}
