//! TUI screens
//!
//! Two screens: the sign-in screen and the sign-up wizard (which also owns
//! the success view shown after the simulated account creation).

pub mod signin;
pub mod signup;

use ratatui::Frame;

use super::app::{ActiveScreen, App};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen {
        ActiveScreen::SignIn => signin::render(frame, app),
        ActiveScreen::SignUp => signup::render(frame, app),
    }
}
