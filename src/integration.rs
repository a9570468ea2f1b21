//! Integration layer
//!
//! Wires the pure core to the terminal: the message runtime, render
//! coalescing and the application runner.

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
