//! Sign-up form data and wizard states
//!
//! The form holds raw field values only; validation results are derived on
//! demand by the services layer and never stored alongside the values.

/// Which phase of the sign-up wizard is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupStep {
    /// Email, password, confirm password
    #[default]
    Credentials,
    /// Name, date of birth, country
    Profile,
}

/// State of the simulated account-creation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    /// No request started
    #[default]
    Idle,
    /// Simulated request running; submit is a no-op in this state
    InFlight,
    /// Account created; the success view is showing
    Succeeded,
}

/// Raw values of the sign-up form
///
/// Created fresh when the sign-up screen is entered and discarded when it is
/// left; nothing here survives navigation.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    /// Month name selected from [`crate::models::MONTHS`]
    pub birth_month: String,
    /// Year selected from [`crate::models::birth_years`], stored as typed
    pub birth_year: String,
    pub country: String,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }
}
