//! Application state for the TUI
//!
//! The App struct holds the active screen and the per-screen state. Screen
//! state is rebuilt from scratch on every navigation, which is also what
//! cancels any countdowns the previous screen instance still had pending.

use crate::config::settings::Settings;

use super::screens::signin::SigninScreenState;
use super::screens::signup::SignupScreenState;

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveScreen {
    #[default]
    SignIn,
    SignUp,
}

/// Main application state
pub struct App {
    /// Application settings (timer durations)
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub screen: ActiveScreen,

    /// Sign-in screen state
    pub signin: SigninScreenState,

    /// Sign-up screen state
    pub signup: SignupScreenState,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            should_quit: false,
            screen: ActiveScreen::default(),
            signin: SigninScreenState::new(),
            signup: SignupScreenState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Navigate to the sign-up screen with a fresh form
    pub fn open_signup(&mut self) {
        self.signup = SignupScreenState::new();
        self.screen = ActiveScreen::SignUp;
    }

    /// Navigate to the sign-in screen
    ///
    /// Discards the sign-up instance, cancelling any pending countdowns with
    /// it; a later tick can no longer deliver their effects anywhere.
    pub fn open_signin(&mut self) {
        self.signup = SignupScreenState::new();
        self.signin = SigninScreenState::new();
        self.screen = ActiveScreen::SignIn;
    }

    /// Advance time-driven state on each tick
    pub fn on_tick(&mut self) {
        if self.screen == ActiveScreen::SignUp {
            let navigate = self.signup.on_tick(&self.settings);
            if navigate {
                self.open_signin();
            }
        }
    }
}
