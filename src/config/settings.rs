//! User settings for onboard-cli
//!
//! Holds the timing knobs for the interactive flows: the email validation
//! debounce, the simulated account-creation delay, the post-success redirect
//! delay, and the event-loop tick rate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::OnboardPaths;
use crate::error::OnboardError;

/// User settings for onboard-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Quiet period after the last email keystroke before revalidation (ms)
    #[serde(default = "default_email_debounce_ms")]
    pub email_debounce_ms: u64,

    /// Duration of the simulated account-creation request (ms)
    #[serde(default = "default_create_account_delay_ms")]
    pub create_account_delay_ms: u64,

    /// Time the success view stays up before returning to sign-in (ms)
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// Event loop tick rate (ms); must be well under the debounce period
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_email_debounce_ms() -> u64 {
    500
}

fn default_create_account_delay_ms() -> u64 {
    1500
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            email_debounce_ms: default_email_debounce_ms(),
            create_account_delay_ms: default_create_account_delay_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// The email validation debounce as a Duration
    pub fn email_debounce(&self) -> Duration {
        Duration::from_millis(self.email_debounce_ms)
    }

    /// The simulated account-creation delay as a Duration
    pub fn create_account_delay(&self) -> Duration {
        Duration::from_millis(self.create_account_delay_ms)
    }

    /// The post-success redirect delay as a Duration
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// The event loop tick rate as a Duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OnboardPaths) -> Result<Self, OnboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| OnboardError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| OnboardError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnboardPaths) -> Result<(), OnboardError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| OnboardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| OnboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
