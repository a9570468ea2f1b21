use crate::{
    core::{cmd::Cmd, msg::history::HistoryMsg},
    domain::booking::BookingRecord,
};

/// The session's booking history. Append-only; records keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    records: Vec<BookingRecord>,
    /// Index of the first record shown on the history screen
    scroll_offset: usize,
}

impl HistoryState {
    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&BookingRecord> {
        self.records.last()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Records from the scroll offset onwards
    pub fn visible_records(&self) -> &[BookingRecord] {
        &self.records[self.scroll_offset.min(self.records.len())..]
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    /// The only write path into the history
    pub fn append(&mut self, record: BookingRecord) -> Vec<Cmd> {
        let message = format!("Booking recorded: {record}");
        self.records.push(record);
        vec![Cmd::LogInfo { message }]
    }

    pub fn update(&mut self, msg: HistoryMsg) -> Vec<Cmd> {
        match msg {
            HistoryMsg::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                vec![]
            }
            HistoryMsg::ScrollDown => {
                if self.scroll_offset + 1 < self.records.len() {
                    self.scroll_offset += 1;
                }
                vec![]
            }
        }
    }
}
