//! Presentation layer
//!
//! - Screen components (catalog, booking form, history, status bar)
//! - Reusable widgets
//! - Configuration types (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
