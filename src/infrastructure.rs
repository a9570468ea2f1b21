//! Infrastructure layer
//!
//! This module handles the outside world:
//! - TUI foundation (terminal, event stream, text editing engine)
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;
