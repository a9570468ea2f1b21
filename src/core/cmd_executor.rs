use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Command executor that bridges Elm commands to the hosting runner
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    /// Create an executor with no host channels; TUI commands are dropped with a warning
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    rtx.send(())?;
                } else {
                    log::debug!("CmdExecutor: render sender not configured; dropping RequestRender");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands, highest priority first.
    /// A failing command does not stop the remaining ones.
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut ordered: Vec<&Cmd> = commands.iter().collect();
        ordered.sort_by_key(|cmd| cmd.priority());

        let mut execution_log = Vec::new();
        for cmd in ordered {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_tui_sender: self.tui_sender.is_some(),
            has_render_sender: self.render_req_sender.is_some(),
            is_tui_sender_closed: self.tui_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_tui_sender: bool,
    pub has_render_sender: bool,
    pub is_tui_sender_closed: Option<bool>,
}
