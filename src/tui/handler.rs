//! Event handler for the TUI
//!
//! Routes keyboard and paste events to the active screen and drives the
//! countdown timers on each tick.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveScreen, App};
use super::event::Event;
use super::screens::{signin, signup};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Paste(text) => {
            match app.screen {
                ActiveScreen::SignIn => signin::handle_paste(app, &text),
                ActiveScreen::SignUp => signup::handle_paste(app, &text),
            }
            Ok(())
        }
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some terminals also report key releases
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Global quit
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.screen {
        ActiveScreen::SignIn => signin::handle_key(app, key),
        ActiveScreen::SignUp => signup::handle_key(app, key),
    }

    Ok(())
}
