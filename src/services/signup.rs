//! Sign-up flow state machine
//!
//! Owns the form values, derived validation state, wizard step, and
//! submission state for one sign-up screen instance, and exposes explicit
//! transition methods so the "step only advances when valid" invariant is
//! checkable in one place.
//!
//! The flow is time-free: transitions that need a countdown return a
//! [`FlowCommand`] and the TUI layer owns the actual timers. Dropping the
//! flow (navigating away) implicitly cancels everything pending, since timer
//! effects are only ever delivered back through these methods.

use crate::models::form::{SignupForm, SignupStep, Submission};
use crate::models::strength::password_strength;

use super::validation::{
    email_format_ok, validate_credentials, validate_profile, FieldErrors, PasswordRules,
};

/// Timer and navigation effects requested by a flow transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCommand {
    /// Cancel any pending email debounce countdown and start a fresh one
    RestartEmailDebounce,
    /// Start the simulated account-creation countdown
    StartCreateAccount,
    /// Start the post-success redirect countdown
    StartRedirect,
    /// Leave the sign-up screen for the sign-in screen
    NavigateToSignIn,
}

/// State machine for one sign-up screen instance
#[derive(Debug, Clone, Default)]
pub struct SignupFlow {
    form: SignupForm,
    errors: FieldErrors,
    rules: PasswordRules,
    step: SignupStep,
    submission: Submission,
    /// Latched by the first password keystroke; gates the strength meter
    /// and rule checklist for the rest of this screen instance
    has_typed_password: bool,
}

impl SignupFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn rules(&self) -> &PasswordRules {
        &self.rules
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn has_typed_password(&self) -> bool {
        self.has_typed_password
    }

    /// Current strength score of the password field
    pub fn strength(&self) -> u8 {
        password_strength(&self.form.password)
    }

    /// Record an email edit
    ///
    /// Every keystroke restarts the debounce countdown (last-write-wins);
    /// the previous countdown must be cancelled by the caller. Password
    /// rules are re-evaluated too, since `no_email` depends on the email.
    pub fn set_email(&mut self, value: String) -> FlowCommand {
        self.form.email = value;
        if !self.form.password.is_empty() {
            self.rules = PasswordRules::evaluate(&self.form.password, &self.form.email);
        }
        FlowCommand::RestartEmailDebounce
    }

    /// The debounce countdown fired: revalidate the email format
    ///
    /// Only acts while the field is non-empty; clears the error if the
    /// address is now valid. The "required" message is left to the eager
    /// check on advance.
    pub fn email_debounce_elapsed(&mut self) {
        if self.form.email.is_empty() {
            return;
        }
        self.errors.email = if email_format_ok(&self.form.email) {
            None
        } else {
            Some("Please enter a valid email address.".to_string())
        };
    }

    /// Record a password edit, re-evaluating the rule set
    pub fn set_password(&mut self, value: String) {
        self.form.password = value;
        if !self.form.password.is_empty() {
            self.has_typed_password = true;
            self.rules = PasswordRules::evaluate(&self.form.password, &self.form.email);
            self.errors.confirm_before_password = None;
        }
    }

    /// Record a confirm-password edit
    ///
    /// Editing confirm before any password has been typed surfaces its own
    /// message; clearing the field or typing a password removes it.
    pub fn set_confirm_password(&mut self, value: String) {
        self.form.confirm_password = value;
        self.errors.confirm_before_password =
            if self.form.password.is_empty() && !self.form.confirm_password.is_empty() {
                Some("Please enter your password first.".to_string())
            } else {
                None
            };
    }

    pub fn set_first_name(&mut self, value: String) {
        self.form.first_name = value;
    }

    pub fn set_last_name(&mut self, value: String) {
        self.form.last_name = value;
    }

    pub fn set_birth_month(&mut self, value: String) {
        self.form.birth_month = value;
    }

    pub fn set_birth_year(&mut self, value: String) {
        self.form.birth_year = value;
    }

    pub fn set_country(&mut self, value: String) {
        self.form.country = value;
    }

    /// Try to advance from Credentials to Profile
    ///
    /// Runs the eager credentials validators; on failure the step is
    /// unchanged and the error slots are populated.
    pub fn advance(&mut self) -> bool {
        if self.step != SignupStep::Credentials {
            return false;
        }
        if validate_credentials(&self.form, &self.rules, &mut self.errors) {
            self.step = SignupStep::Profile;
            true
        } else {
            false
        }
    }

    /// Return from Profile to Credentials, retaining all field values
    pub fn back(&mut self) {
        if self.step == SignupStep::Profile && self.submission == Submission::Idle {
            self.step = SignupStep::Credentials;
        }
    }

    /// Try to submit the profile step
    ///
    /// A no-op unless the step is Profile and no submission is in flight.
    /// On success the submission moves to InFlight and the caller starts
    /// the account-creation countdown.
    pub fn submit(&mut self) -> Option<FlowCommand> {
        if self.step != SignupStep::Profile || self.submission != Submission::Idle {
            return None;
        }
        if validate_profile(&self.form, &mut self.errors) {
            self.submission = Submission::InFlight;
            Some(FlowCommand::StartCreateAccount)
        } else {
            None
        }
    }

    /// The simulated account creation finished (it always succeeds)
    pub fn create_account_completed(&mut self) -> Option<FlowCommand> {
        if self.submission != Submission::InFlight {
            return None;
        }
        self.submission = Submission::Succeeded;
        Some(FlowCommand::StartRedirect)
    }

    /// The post-success redirect countdown fired
    pub fn redirect_elapsed(&mut self) -> Option<FlowCommand> {
        if self.submission != Submission::Succeeded {
            return None;
        }
        Some(FlowCommand::NavigateToSignIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_credentials(flow: &mut SignupFlow) {
        flow.set_email("user@example.com".to_string());
        flow.set_password("Abcdefg1".to_string());
        flow.set_confirm_password("Abcdefg1".to_string());
    }

    fn valid_profile(flow: &mut SignupFlow) {
        flow.set_first_name("Ada".to_string());
        flow.set_last_name("Lovelace".to_string());
        flow.set_birth_month("December".to_string());
        flow.set_birth_year("1990".to_string());
        flow.set_country("United Kingdom".to_string());
    }

    #[test]
    fn test_advance_with_valid_credentials() {
        let mut flow = SignupFlow::new();
        valid_credentials(&mut flow);

        assert!(flow.advance());
        assert_eq!(flow.step(), SignupStep::Profile);
        assert_eq!(flow.errors().email, None);
        assert_eq!(flow.errors().password, None);
        assert_eq!(flow.errors().confirm_password, None);
    }

    #[test]
    fn test_advance_blocked_by_invalid_field() {
        let mut flow = SignupFlow::new();
        flow.set_email("user@example.com".to_string());
        flow.set_password("Abcdefg1".to_string());
        flow.set_confirm_password("different".to_string());

        assert!(!flow.advance());
        assert_eq!(flow.step(), SignupStep::Credentials);
        assert!(flow.errors().confirm_password.is_some());
    }

    #[test]
    fn test_advance_with_empty_form_populates_required_errors() {
        let mut flow = SignupFlow::new();

        assert!(!flow.advance());
        assert_eq!(
            flow.errors().email.as_deref(),
            Some("Please enter an email address.")
        );
        assert_eq!(
            flow.errors().password.as_deref(),
            Some("Please enter a password.")
        );
        assert_eq!(
            flow.errors().confirm_password.as_deref(),
            Some("Please confirm your password.")
        );
    }

    #[test]
    fn test_email_edit_requests_debounce_restart() {
        let mut flow = SignupFlow::new();
        assert_eq!(
            flow.set_email("u".to_string()),
            FlowCommand::RestartEmailDebounce
        );
    }

    #[test]
    fn test_debounce_sets_and_clears_format_error() {
        let mut flow = SignupFlow::new();

        flow.set_email("not-an-email".to_string());
        flow.email_debounce_elapsed();
        assert_eq!(
            flow.errors().email.as_deref(),
            Some("Please enter a valid email address.")
        );

        flow.set_email("user@example.com".to_string());
        flow.email_debounce_elapsed();
        assert_eq!(flow.errors().email, None);
    }

    #[test]
    fn test_debounce_ignores_empty_email() {
        let mut flow = SignupFlow::new();
        flow.set_email("bad".to_string());
        flow.email_debounce_elapsed();
        assert!(flow.errors().email.is_some());

        // Emptying the field does not touch the error; the eager check owns
        // the "required" message
        flow.set_email(String::new());
        flow.email_debounce_elapsed();
        assert!(flow.errors().email.is_some());
    }

    #[test]
    fn test_password_typing_latches_flag() {
        let mut flow = SignupFlow::new();
        assert!(!flow.has_typed_password());

        flow.set_password("a".to_string());
        assert!(flow.has_typed_password());

        flow.set_password(String::new());
        assert!(flow.has_typed_password());
    }

    #[test]
    fn test_rules_follow_email_edits() {
        let mut flow = SignupFlow::new();
        flow.set_password("User@Example.comX1".to_string());
        assert!(flow.rules().no_email);

        flow.set_email("user@example.com".to_string());
        assert!(!flow.rules().no_email);
    }

    #[test]
    fn test_confirm_before_password_error() {
        let mut flow = SignupFlow::new();

        flow.set_confirm_password("abc".to_string());
        assert!(flow.errors().confirm_before_password.is_some());

        // Clearing confirm clears it
        flow.set_confirm_password(String::new());
        assert_eq!(flow.errors().confirm_before_password, None);

        // Entering a password clears it too
        flow.set_confirm_password("abc".to_string());
        flow.set_password("Abcdefg1".to_string());
        assert_eq!(flow.errors().confirm_before_password, None);
    }

    #[test]
    fn test_back_retains_profile_values() {
        let mut flow = SignupFlow::new();
        valid_credentials(&mut flow);
        assert!(flow.advance());

        flow.set_first_name("Ada".to_string());
        flow.back();
        assert_eq!(flow.step(), SignupStep::Credentials);

        assert!(flow.advance());
        assert_eq!(flow.form().first_name, "Ada");
    }

    #[test]
    fn test_submit_with_incomplete_profile_stays_idle() {
        let mut flow = SignupFlow::new();
        valid_credentials(&mut flow);
        assert!(flow.advance());

        assert_eq!(flow.submit(), None);
        assert_eq!(flow.submission(), Submission::Idle);
        assert_eq!(flow.step(), SignupStep::Profile);
        assert!(flow.errors().first_name.is_some());
    }

    #[test]
    fn test_submit_from_credentials_is_noop() {
        let mut flow = SignupFlow::new();
        assert_eq!(flow.submit(), None);
        assert_eq!(flow.submission(), Submission::Idle);
    }

    #[test]
    fn test_full_submission_lifecycle() {
        let mut flow = SignupFlow::new();
        valid_credentials(&mut flow);
        assert!(flow.advance());
        valid_profile(&mut flow);

        assert_eq!(flow.submit(), Some(FlowCommand::StartCreateAccount));
        assert_eq!(flow.submission(), Submission::InFlight);

        // Submit is idempotent while in flight
        assert_eq!(flow.submit(), None);
        assert_eq!(flow.submission(), Submission::InFlight);

        assert_eq!(
            flow.create_account_completed(),
            Some(FlowCommand::StartRedirect)
        );
        assert_eq!(flow.submission(), Submission::Succeeded);

        assert_eq!(flow.redirect_elapsed(), Some(FlowCommand::NavigateToSignIn));
    }

    #[test]
    fn test_stale_timer_effects_are_ignored() {
        let mut flow = SignupFlow::new();

        // Completion and redirect signals without a matching submission
        assert_eq!(flow.create_account_completed(), None);
        assert_eq!(flow.redirect_elapsed(), None);
        assert_eq!(flow.submission(), Submission::Idle);
    }

    #[test]
    fn test_back_is_noop_while_in_flight() {
        let mut flow = SignupFlow::new();
        valid_credentials(&mut flow);
        assert!(flow.advance());
        valid_profile(&mut flow);
        flow.submit();

        flow.back();
        assert_eq!(flow.step(), SignupStep::Profile);
    }
}
