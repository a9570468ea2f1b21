use std::collections::VecDeque;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;

/// Owns the application state and serialises every message through `update`
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a new Runtime editing text through tui-textarea
    pub fn new(initial_state: AppState) -> Self {
        Self::new_with_context(initial_state, UpdateContext { text_area: &ENGINE })
    }

    /// Create a new Runtime with a custom update context (e.g. a no-op text engine)
    pub fn new_with_context(initial_state: AppState, ctx: UpdateContext<'static>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx,
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(),
        }
    }

    /// Route TuiCommand execution to the runner
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(&mut self, render_sender: mpsc::UnboundedSender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Drain pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::trace!("Processing {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &self.ctx);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());

        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state at the time they are read
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.translate_and_process(raw_msg, &mut all_commands);
        }
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.translate_and_process(raw_msg, &mut all_commands);
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    fn translate_and_process(&mut self, raw_msg: RawMsg, all_commands: &mut Vec<Cmd>) {
        for msg in translate_raw_to_domain(raw_msg, &self.state) {
            all_commands.extend(self.process_message(msg));
        }
    }

    /// Process all messages and execute commands in one step.
    /// Failed commands are reported on the status bar in the next cycle.
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        self.process_all_messages();
        let execution_log = self.execute_pending_commands()?;
        for failure in execution_log.iter().filter(|line| line.starts_with('✗')) {
            self.send_raw_msg(RawMsg::Error(failure.trim_start_matches('✗').trim().to_string()));
        }
        Ok(execution_log)
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        let executor = self.cmd_executor.get_stats();
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            screen: self.state.screen().name(),
            history_len: self.state.history.len(),
            has_tui_sender: executor.has_tui_sender,
            has_render_sender: executor.has_render_sender,
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub screen: &'static str,
    pub history_len: usize,
    pub has_tui_sender: bool,
    pub has_render_sender: bool,
}
