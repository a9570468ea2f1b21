//! # Booksport - sports court booking TUI
//!
//! A terminal client for browsing a small sport catalog, booking a court and
//! reviewing the bookings made during the session. Built with Ratatui around
//! an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** ([`core::state`]): the application state, including the
//!   navigation controller and the append-only booking history
//! - **Message** ([`core::msg`]): events that can change the state
//! - **Update** ([`core::update`]): functions that transform state
//! - **Command** ([`core::cmd`]): side effects for the host to perform
//! - **View** ([`presentation::components`]): rendering from the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use booksport::core::{
//!     msg::{form::FormMsg, navigation::NavMsg, Msg},
//!     state::{form::FormField, AppState},
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! let (state, _) = update(Msg::Nav(NavMsg::OpenBookingForm("Futsal".into())), state);
//!
//! let mut state = state;
//! for (field, value) in FormField::ALL.iter().zip(["31/12/2023", "14:30", "2", "Andi"]) {
//!     let (next, _) = update(Msg::Form(FormMsg::SetField(*field, value.into())), state);
//!     state = next;
//! }
//! let (state, _) = update(Msg::Form(FormMsg::Submit), state);
//!
//! assert_eq!(state.history.len(), 1);
//! assert_eq!(state.history.last().map(|r| r.duration), Some(2));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and translation
//! - [`domain`] - Sports, bookings and text cursor primitives
//! - [`infrastructure`] - Terminal, configuration and CLI
//! - [`integration`] - Runtime and application runner
//! - [`presentation`] - Components, widgets, styles and keybindings
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

#[cfg(test)]
pub mod test_helpers;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
