//! PinCode TUI Library
//!
//! Terminal rendering and a demo host for the four-digit PIN entry widget.

pub mod app;
pub mod cli;
pub mod ui;

pub use app::App;
