//! Configuration module for onboard-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Timer durations for the simulated flows

pub mod paths;
pub mod settings;

pub use paths::OnboardPaths;
pub use settings::Settings;
