//! calc-tui - a four-function calculator for the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod terminal;
pub mod ui;
