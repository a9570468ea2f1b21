use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated exclusively by AppRunner, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects the pure update function asks the host to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via render_req_sender and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },
}

impl Cmd {

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::RequestRender => 0,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,
        }
    }

    /// Human-readable command name for execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::RequestRender => "RequestRender",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
        }
    }
}
