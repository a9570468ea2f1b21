//! Domain logic
//!
//! This module contains the booking domain, free of any UI concerns:
//! - The compiled-in sport catalog and its search filter
//! - Booking records and the draft they are built from
//! - Text cursor primitives shared by editable fields

pub mod booking;
pub mod sport;
pub mod ui;
