//! onboard-cli - Terminal-based account sign-up and sign-in front end
//!
//! This library provides the core functionality for the onboard-cli
//! application: a sign-in screen and a two-step sign-up wizard with
//! client-side validation, rendered as a terminal user interface.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Form data, password strength scoring, reference data
//! - `services`: Field validators and the sign-up flow state machine
//! - `tui`: The ratatui-based terminal interface
//!
//! Account creation is simulated with a fixed delay; there is no backend
//! and no form data is ever persisted.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::OnboardError;
