//! Core data models for onboard-cli
//!
//! This module contains the data structures that represent the onboarding
//! domain: the sign-up form, the wizard step and submission states, password
//! strength scoring, and static reference data for the select fields.

pub mod form;
pub mod reference;
pub mod strength;

pub use form::{SignupForm, SignupStep, Submission};
pub use reference::{birth_years, COUNTRIES, MIN_BIRTH_YEAR, MONTHS};
pub use strength::{password_strength, StrengthLabel, STRENGTH_SEGMENTS};
