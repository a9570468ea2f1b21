//! Reusable UI widgets
//!
//! Stateless building blocks shared by the screen components.

pub mod booking_item;
pub mod button;
pub mod sport_card;
pub mod text_field;
