//! Terminal User Interface module
//!
//! This module provides the TUI for onboard-cli using ratatui: the sign-in
//! screen, the two-step sign-up wizard, and the countdown timers behind the
//! debounced validation and the simulated account creation.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod timer;

// Screens
pub mod screens;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
