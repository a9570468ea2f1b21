use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Test-oriented TUI implementation backed by ratatui::backend::TestBackend.
/// - enter/exit/suspend/resume only count calls (no raw mode / alternate screen).
/// - next() returns events from an internal queue (non-blocking, immediate).
/// - draw() increments an internal counter for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    /// Expose draw count for tests.
    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Enqueue a single event for tests.
    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last drawn frame
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn frame as plain text, one string per row
    pub fn screen_lines(&self) -> Vec<String> {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        self.exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::widgets::Paragraph;

    #[test]
    fn test_draw_counts_and_captures_text() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.draw(&mut |frame: &mut Frame<'_>| {
            frame.render_widget(Paragraph::new("Futsal"), frame.area());
        })?;

        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen_lines(), vec!["Futsal    ", "          "]);
        Ok(())
    }

    #[test]
    fn test_suspend_exits_and_counts() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.enter()?;
        assert!(tui.is_entered());

        tui.suspend()?;
        assert!(!tui.is_entered());
        assert_eq!(tui.suspend_count(), 1);

        tui.resume()?;
        assert!(tui.is_entered());
        Ok(())
    }
}
