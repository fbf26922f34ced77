//! Field validators for the sign-up form
//!
//! All validators are pure functions over the current field values; derived
//! validation state is recomputed on demand and never cached across edits.
//! Error messages are exactly the ones shown inline beneath each field.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::form::SignupForm;
use crate::models::strength::SYMBOLS;

/// local@domain.tld - no whitespace, one `@`, at least one `.` after it
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Check whether an email address is well-formed
pub fn email_format_ok(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The four independent conditions a password must satisfy
///
/// Rules are re-evaluated on every keystroke once the password field is
/// non-empty; `no_email` also depends on the email field and is vacuously
/// true while the email is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRules {
    /// At least 8 characters
    pub min_length: bool,
    /// Both an uppercase and a lowercase letter
    pub mixed_case: bool,
    /// A digit or a symbol from the fixed punctuation set
    pub digit_or_symbol: bool,
    /// Password does not contain the email (case-insensitive)
    pub no_email: bool,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: false,
            mixed_case: false,
            digit_or_symbol: false,
            no_email: true,
        }
    }
}

impl PasswordRules {
    /// Evaluate all four rules against the current password and email
    pub fn evaluate(password: &str, email: &str) -> Self {
        Self {
            min_length: password.chars().count() >= 8,
            mixed_case: password.chars().any(|c| c.is_ascii_lowercase())
                && password.chars().any(|c| c.is_ascii_uppercase()),
            digit_or_symbol: password
                .chars()
                .any(|c| c.is_ascii_digit() || SYMBOLS.contains(c)),
            no_email: if email.is_empty() {
                true
            } else {
                !password.to_lowercase().contains(&email.to_lowercase())
            },
        }
    }

    /// Whether every rule is satisfied
    pub fn all_met(&self) -> bool {
        self.min_length && self.mixed_case && self.digit_or_symbol && self.no_email
    }
}

/// Per-field inline error messages; `None` means the field is valid
///
/// `confirm_before_password` is a separate slot from the match error: it is
/// shown when the user edits confirm-password before typing a password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub confirm_before_password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_month: Option<String>,
    pub birth_year: Option<String>,
    pub country: Option<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Eagerly validate the credentials step, repopulating its error slots
///
/// Distinguishes "required" from "invalid format" for the email field, which
/// the debounced check does not. Returns true when the step may advance.
pub fn validate_credentials(
    form: &SignupForm,
    rules: &PasswordRules,
    errors: &mut FieldErrors,
) -> bool {
    errors.email = if form.email.is_empty() {
        Some("Please enter an email address.".to_string())
    } else if !email_format_ok(&form.email) {
        Some("Please enter a valid email address.".to_string())
    } else {
        None
    };

    errors.password = if form.password.is_empty() {
        Some("Please enter a password.".to_string())
    } else if !rules.all_met() {
        Some("Password doesn't meet all requirements.".to_string())
    } else {
        None
    };

    errors.confirm_password = if form.confirm_password.is_empty() {
        Some("Please confirm your password.".to_string())
    } else if form.confirm_password != form.password {
        Some("Passwords do not match.".to_string())
    } else {
        None
    };

    errors.email.is_none() && errors.password.is_none() && errors.confirm_password.is_none()
}

/// Eagerly validate the profile step, repopulating its error slots
///
/// Simple non-empty/selected checks; returns true when submission may start.
pub fn validate_profile(form: &SignupForm, errors: &mut FieldErrors) -> bool {
    errors.first_name = if form.first_name.trim().is_empty() {
        Some("First name is required.".to_string())
    } else {
        None
    };

    errors.last_name = if form.last_name.trim().is_empty() {
        Some("Last name is required.".to_string())
    } else {
        None
    };

    errors.birth_month = if form.birth_month.is_empty() {
        Some("Month is required.".to_string())
    } else {
        None
    };

    errors.birth_year = if form.birth_year.is_empty() {
        Some("Year is required.".to_string())
    } else {
        None
    };

    errors.country = if form.country.is_empty() {
        Some("Country is required.".to_string())
    } else {
        None
    };

    errors.first_name.is_none()
        && errors.last_name.is_none()
        && errors.birth_month.is_none()
        && errors.birth_year.is_none()
        && errors.country.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format_accepts_plain_address() {
        assert!(email_format_ok("user@example.com"));
        assert!(email_format_ok("first.last@sub.domain.org"));
    }

    #[test]
    fn test_email_format_rejects_malformed() {
        assert!(!email_format_ok(""));
        assert!(!email_format_ok("user"));
        assert!(!email_format_ok("user@domain"));
        assert!(!email_format_ok("user@@example.com"));
        assert!(!email_format_ok("user name@example.com"));
        assert!(!email_format_ok("user@exa mple.com"));
    }

    #[test]
    fn test_short_password_fails_min_length() {
        for pwd in ["", "a", "Abc123!", "1234567"] {
            let rules = PasswordRules::evaluate(pwd, "");
            assert!(!rules.min_length, "{:?} should fail min_length", pwd);
        }
        assert!(PasswordRules::evaluate("12345678", "").min_length);
    }

    #[test]
    fn test_mixed_case_requires_both_cases() {
        assert!(PasswordRules::evaluate("aB", "").mixed_case);
        assert!(!PasswordRules::evaluate("lowercase", "").mixed_case);
        assert!(!PasswordRules::evaluate("UPPERCASE", "").mixed_case);
        assert!(!PasswordRules::evaluate("1234!", "").mixed_case);
    }

    #[test]
    fn test_digit_or_symbol() {
        assert!(PasswordRules::evaluate("abc1", "").digit_or_symbol);
        assert!(PasswordRules::evaluate("abc$", "").digit_or_symbol);
        assert!(PasswordRules::evaluate("abc_", "").digit_or_symbol);
        assert!(!PasswordRules::evaluate("abcDEF", "").digit_or_symbol);
    }

    #[test]
    fn test_no_email_is_vacuously_true_without_email() {
        let rules = PasswordRules::evaluate("anything", "");
        assert!(rules.no_email);
    }

    #[test]
    fn test_no_email_is_case_insensitive() {
        let rules = PasswordRules::evaluate("xxUSER@Example.comxx", "user@example.com");
        assert!(!rules.no_email);

        let rules = PasswordRules::evaluate("Password123!", "user@example.com");
        assert!(rules.no_email);
    }

    #[test]
    fn test_default_rules_match_untyped_password() {
        let rules = PasswordRules::default();
        assert!(!rules.min_length);
        assert!(!rules.mixed_case);
        assert!(!rules.digit_or_symbol);
        assert!(rules.no_email);
        assert!(!rules.all_met());
    }

    #[test]
    fn test_all_rules_met() {
        let rules = PasswordRules::evaluate("Abcdefg1", "user@example.com");
        assert!(rules.all_met());
    }

    #[test]
    fn test_credentials_validation_distinguishes_empty_from_invalid() {
        let mut form = SignupForm::new();
        let mut errors = FieldErrors::new();

        let rules = PasswordRules::evaluate(&form.password, &form.email);
        assert!(!validate_credentials(&form, &rules, &mut errors));
        assert_eq!(errors.email.as_deref(), Some("Please enter an email address."));

        form.email = "not-an-email".to_string();
        let rules = PasswordRules::evaluate(&form.password, &form.email);
        assert!(!validate_credentials(&form, &rules, &mut errors));
        assert_eq!(
            errors.email.as_deref(),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn test_credentials_validation_pass_clears_errors() {
        let mut form = SignupForm::new();
        form.email = "user@example.com".to_string();
        form.password = "Abcdefg1".to_string();
        form.confirm_password = "Abcdefg1".to_string();

        let mut errors = FieldErrors::new();
        errors.email = Some("stale".to_string());

        let rules = PasswordRules::evaluate(&form.password, &form.email);
        assert!(validate_credentials(&form, &rules, &mut errors));
        assert_eq!(errors.email, None);
        assert_eq!(errors.password, None);
        assert_eq!(errors.confirm_password, None);
    }

    #[test]
    fn test_credentials_validation_rejects_weak_password() {
        let mut form = SignupForm::new();
        form.email = "user@example.com".to_string();
        form.password = "weak".to_string();
        form.confirm_password = "weak".to_string();

        let mut errors = FieldErrors::new();
        let rules = PasswordRules::evaluate(&form.password, &form.email);
        assert!(!validate_credentials(&form, &rules, &mut errors));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password doesn't meet all requirements.")
        );
    }

    #[test]
    fn test_credentials_validation_rejects_mismatch() {
        let mut form = SignupForm::new();
        form.email = "user@example.com".to_string();
        form.password = "Abcdefg1".to_string();
        form.confirm_password = "Abcdefg2".to_string();

        let mut errors = FieldErrors::new();
        let rules = PasswordRules::evaluate(&form.password, &form.email);
        assert!(!validate_credentials(&form, &rules, &mut errors));
        assert_eq!(errors.confirm_password.as_deref(), Some("Passwords do not match."));
    }

    #[test]
    fn test_profile_validation_requires_every_field() {
        let form = SignupForm::new();
        let mut errors = FieldErrors::new();

        assert!(!validate_profile(&form, &mut errors));
        assert_eq!(errors.first_name.as_deref(), Some("First name is required."));
        assert_eq!(errors.last_name.as_deref(), Some("Last name is required."));
        assert_eq!(errors.birth_month.as_deref(), Some("Month is required."));
        assert_eq!(errors.birth_year.as_deref(), Some("Year is required."));
        assert_eq!(errors.country.as_deref(), Some("Country is required."));
    }

    #[test]
    fn test_profile_validation_rejects_whitespace_names() {
        let mut form = SignupForm::new();
        form.first_name = "   ".to_string();
        form.last_name = "Doe".to_string();
        form.birth_month = "March".to_string();
        form.birth_year = "1990".to_string();
        form.country = "Canada".to_string();

        let mut errors = FieldErrors::new();
        assert!(!validate_profile(&form, &mut errors));
        assert!(errors.first_name.is_some());
        assert_eq!(errors.last_name, None);
    }

    #[test]
    fn test_profile_validation_passes_when_complete() {
        let mut form = SignupForm::new();
        form.first_name = "Ada".to_string();
        form.last_name = "Lovelace".to_string();
        form.birth_month = "December".to_string();
        form.birth_year = "1990".to_string();
        form.country = "United Kingdom".to_string();

        let mut errors = FieldErrors::new();
        assert!(validate_profile(&form, &mut errors));
        assert_eq!(errors, FieldErrors::new());
    }
}
