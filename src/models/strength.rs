//! Password strength scoring
//!
//! Scoring is advisory only and independent of pass/fail validation: a
//! password can score well while still failing a rule (or vice versa for
//! short-but-complex passwords).

use std::fmt;

/// Number of segments in the visual strength meter
pub const STRENGTH_SEGMENTS: u8 = 4;

/// Punctuation characters that count toward the digit-or-symbol check
pub(crate) const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Score a password from 0 to 4
///
/// One point each for: length >= 8, length >= 12, both letter cases present,
/// and a digit or symbol present. Capped at 4.
pub fn password_strength(password: &str) -> u8 {
    let mut strength = 0;

    // Length checks (characters, not bytes)
    let length = password.chars().count();
    if length >= 8 {
        strength += 1;
    }
    if length >= 12 {
        strength += 1;
    }

    // Complexity checks
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        strength += 1;
    }
    if password
        .chars()
        .any(|c| c.is_ascii_digit() || SYMBOLS.contains(c))
    {
        strength += 1;
    }

    strength.min(STRENGTH_SEGMENTS)
}

/// Human-readable strength band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Map a score to its label, clamping out-of-range scores to the ends
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Medium,
            3 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Whether meter segment `i` (1-indexed, 1..=4) is filled for `score`
    pub fn segment_filled(score: u8, i: u8) -> bool {
        score >= i
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VeryWeak => "Very weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very strong",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_short_lowercase_scores_zero() {
        // "abc": too short, single case, no digit or symbol
        assert_eq!(password_strength("abc"), 0);
        assert_eq!(
            StrengthLabel::from_score(password_strength("abc")).to_string(),
            "Very weak"
        );
    }

    #[test]
    fn test_each_condition_adds_one() {
        assert_eq!(password_strength("abcdefgh"), 1); // length >= 8
        assert_eq!(password_strength("abcdefghijkl"), 2); // length >= 12
        assert_eq!(password_strength("Abcdefghijkl"), 3); // + mixed case
        assert_eq!(password_strength("Abcdefghijk1"), 4); // + digit
    }

    #[test]
    fn test_symbol_counts_as_complexity() {
        assert_eq!(password_strength("Abcdefghijk!"), 4);
        // Symbol alone on a short single-case password
        assert_eq!(password_strength("ab!"), 1);
    }

    #[test]
    fn test_monotonic_in_each_condition() {
        // Adding a contributing condition never lowers the score
        let base = "abcdefgh";
        assert!(password_strength("Abcdefgh") >= password_strength(base));
        assert!(password_strength("abcdefgh1") >= password_strength(base));
        assert!(password_strength("abcdefghijkl") >= password_strength(base));
    }

    #[test]
    fn test_score_capped_at_four() {
        let long_complex = "Abcdefghijklmnop123!@#";
        assert_eq!(password_strength(long_complex), 4);
        assert_eq!(
            StrengthLabel::from_score(password_strength(long_complex)),
            StrengthLabel::VeryStrong
        );
    }

    #[test]
    fn test_label_clamps_above_four() {
        assert_eq!(StrengthLabel::from_score(9), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_segment_fill() {
        assert!(StrengthLabel::segment_filled(4, 4));
        assert!(StrengthLabel::segment_filled(2, 1));
        assert!(!StrengthLabel::segment_filled(2, 3));
        assert!(!StrengthLabel::segment_filled(0, 1));
    }

    #[test]
    fn test_strong_password_labels() {
        // "Password123!" hits all four conditions
        assert_eq!(password_strength("Password123!"), 4);
        assert_eq!(StrengthLabel::from_score(4).to_string(), "Very strong");
    }
}
