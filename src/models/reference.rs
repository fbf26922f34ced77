//! Static reference data for the sign-up select fields
//!
//! Month names, country names, and the generated birth-year range. These are
//! read-only lookup sequences; the form stores the selected entry as a string.

use chrono::Datelike;

/// Ordered month names for the date-of-birth select
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Earliest selectable birth year
pub const MIN_BIRTH_YEAR: i32 = 1925;

/// Ordered country names for the country/region select
pub const COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Czech Republic",
    "Denmark",
    "Egypt",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hungary",
    "India",
    "Indonesia",
    "Ireland",
    "Israel",
    "Italy",
    "Japan",
    "Kenya",
    "Malaysia",
    "Mexico",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Norway",
    "Pakistan",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Romania",
    "Saudi Arabia",
    "Singapore",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Thailand",
    "Turkey",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Vietnam",
];

/// Birth years from the current year down to [`MIN_BIRTH_YEAR`], descending
///
/// The year is always picked from this list, never free-typed.
pub fn birth_years() -> Vec<i32> {
    let current_year = chrono::Local::now().year();
    (MIN_BIRTH_YEAR..=current_year).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_months_in_order() {
        assert_eq!(MONTHS.len(), 12);
        assert_eq!(MONTHS[0], "January");
        assert_eq!(MONTHS[11], "December");
    }

    #[test]
    fn test_birth_years_bounds() {
        let years = birth_years();
        let current_year = chrono::Local::now().year();

        assert_eq!(years.first().copied(), Some(current_year));
        assert_eq!(years.last().copied(), Some(MIN_BIRTH_YEAR));
        // 100-year-plus range
        assert!(years.len() > 100);
    }

    #[test]
    fn test_birth_years_descending() {
        let years = birth_years();
        assert!(years.windows(2).all(|w| w[0] == w[1] + 1));
    }

    #[test]
    fn test_countries_sorted_and_nonempty() {
        assert!(!COUNTRIES.is_empty());
        assert!(COUNTRIES.windows(2).all(|w| w[0] < w[1]));
    }
}
