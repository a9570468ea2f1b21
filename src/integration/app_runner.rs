use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the application: pulls terminal events, feeds them to the runtime,
/// applies terminal commands and renders.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    last_size: Option<(u16, u16)>,
}

impl AppRunner {
    /// Runner reading events from, and drawing into, `tui`
    pub fn new_with_tui(config: Config, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        let mut runtime = Runtime::new(AppState::new_with_config(config));
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx);
        runtime.add_render_request_sender(render_req_tx);

        Self {
            runtime,
            event_source: EventSource::real(Arc::clone(&tui)),
            tui,
            renderer: Renderer::new(),
            tui_cmd_rx,
            render_req_rx,
            last_size: None,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Replace where events come from; the runner still draws into its TUI
    pub fn set_event_source_for_tests(&mut self, source: EventSource) {
        self.event_source = source;
    }

    /// Run until the user quits or the event source is exhausted
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        loop {
            let Some(event) = self.event_source.next().await else {
                log::info!("Event source closed, shutting down");
                break;
            };
            let frame_due = self.forward_event(event);
            self.run_one_cycle(frame_due).await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
        }

        log::debug!("Runtime at shutdown: {:?}", self.runtime.get_stats());
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Queues the raw message for `event`. Returns whether a frame should follow.
    fn forward_event(&mut self, event: tui::Event) -> bool {
        let raw = match event {
            tui::Event::Quit | tui::Event::Closed => RawMsg::Quit,
            tui::Event::Tick => RawMsg::Tick,
            tui::Event::Render => return true,
            tui::Event::Resize(w, h) => RawMsg::Resize(w, h),
            tui::Event::Key(key) => RawMsg::Key(key),
            tui::Event::Paste(text) => RawMsg::Paste(text),
            tui::Event::Init | tui::Event::FocusGained => return true,
            tui::Event::Error => RawMsg::Error("Terminal event stream failed".into()),
            tui::Event::FocusLost | tui::Event::Mouse(_) => return false,
        };
        let frame_due = matches!(raw, RawMsg::Key(_) | RawMsg::Paste(_) | RawMsg::Error(_));
        self.runtime.send_raw_msg(raw);
        frame_due
    }

    /// One update cycle followed by any coalesced resize and render
    pub async fn run_one_cycle(&mut self, frame_due: bool) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime.send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        let mut resizes = Vec::new();
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => resizes.push((width, height)),
            }
        }
        let resized = match Coalescer::decide_resize(self.last_size, &resizes) {
            Some((width, height)) => {
                self.tui.lock().await.resize(Rect::new(0, 0, width, height))?;
                self.last_size = Some((width, height));
                true
            }
            None => false,
        };

        let mut queued = 0;
        while self.render_req_rx.try_recv().is_ok() {
            queued += 1;
        }
        if Coalescer::decide_render(queued, frame_due || resized) {
            self.render().await?;
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.run_one_cycle(true).await
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use crate::infrastructure::tui::{test::TestTui, Event};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn runner_with(events: Vec<Event>) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let test_tui = Arc::new(Mutex::new(TestTui::with_events(60, 30, events)?));
        let runner = AppRunner::new_with_tui(Config::embedded()?, test_tui.clone());
        Ok((runner, test_tui))
    }

    #[tokio::test]
    async fn test_quit_key_stops_and_exits_terminal() -> Result<()> {
        let (mut runner, tui) = runner_with(vec![Event::Init, key(KeyCode::Char('q')), key(KeyCode::Down)])?;
        runner.run().await?;

        assert!(runner.runtime().state().system.should_quit);
        // The trailing Down was never read
        assert_eq!(runner.runtime().state().catalog.cursor(), 0);
        assert!(!tui.lock().await.is_entered());
        Ok(())
    }

    #[tokio::test]
    async fn test_exhausted_source_ends_run() -> Result<()> {
        let (mut runner, tui) = runner_with(vec![key(KeyCode::Down)])?;
        runner.run().await?;

        assert!(!runner.runtime().state().system.should_quit);
        assert_eq!(runner.runtime().state().catalog.cursor(), 1);
        // Initial frame plus one for the key
        assert_eq!(tui.lock().await.draw_count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_ticks_do_not_redraw() -> Result<()> {
        let (mut runner, tui) = runner_with(vec![Event::Tick, Event::Tick, Event::FocusLost])?;
        runner.run().await?;
        assert_eq!(tui.lock().await.draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_ctrl_z_suspends_and_resumes() -> Result<()> {
        let ctrl_z = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let (mut runner, tui) = runner_with(vec![ctrl_z])?;
        runner.run().await?;

        assert!(!runner.runtime().state().system.should_suspend);
        assert_eq!(tui.lock().await.suspend_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_is_applied_to_terminal() -> Result<()> {
        let (mut runner, tui) = runner_with(vec![Event::Resize(40, 20)])?;
        runner.run().await?;

        let guard = tui.lock().await;
        assert_eq!(guard.buffer().area, Rect::new(0, 0, 40, 20));
        Ok(())
    }

    #[tokio::test]
    async fn test_scripted_event_source() -> Result<()> {
        let (mut runner, tui) = runner_with(vec![])?;
        runner.set_event_source_for_tests(EventSource::test([
            key(KeyCode::Char('p')),
            key(KeyCode::Esc),
            key(KeyCode::Char('p')),
        ]));
        runner.run().await?;

        assert!(runner.runtime().state().nav.is_history());
        assert!(tui.lock().await.screen_lines()[0].contains("Booking History"));
        Ok(())
    }
}
