//! Field validators and search pattern compilation
//!
//! Everything here is pure: the same checks back form submission and
//! search-match highlighting.

mod form;
mod pattern;

pub use form::{validate_transaction_form, TransactionForm};
pub use pattern::{
    compile_pattern, highlight_matches, safe_regex_compile, safe_regex_compile_with, PatternError,
    PatternFlags,
};

use chrono::NaiveDate;
use lazy_regex::{regex, regex_is_match};

/// Non-empty with no leading or trailing whitespace
///
/// Internal double spaces are not rejected here; see [`has_double_spaces`].
pub fn validate_description(description: &str) -> bool {
    regex_is_match!(r"^\S(?:.*\S)?$", description)
}

/// Two or more consecutive whitespace characters anywhere in the text
pub fn has_double_spaces(text: &str) -> bool {
    regex_is_match!(r"\s\s", text)
}

/// Words that are immediately repeated, compared case-insensitively
///
/// A word is a run of ASCII letters, digits or underscores; the two
/// occurrences must be separated by whitespace only. Each word is reported
/// once, spelled as at its first repetition. Returns `None` when nothing
/// repeats.
pub fn find_duplicate_words(text: &str) -> Option<Vec<String>> {
    let words = regex!(r"[A-Za-z0-9_]+");
    let mut found: Vec<String> = Vec::new();
    let mut previous: Option<(usize, &str)> = None;

    for current in words.find_iter(text) {
        if let Some((prev_end, prev_word)) = previous {
            let gap = &text[prev_end..current.start()];
            let repeated = gap.chars().all(char::is_whitespace)
                && prev_word.eq_ignore_ascii_case(current.as_str());

            if repeated && !found.iter().any(|w| w.eq_ignore_ascii_case(prev_word)) {
                found.push(prev_word.to_string());
            }
        }
        previous = Some((current.end(), current.as_str()));
    }

    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

/// Letters with optional single space or hyphen separators
pub fn validate_category(category: &str) -> bool {
    regex_is_match!(r"^[A-Za-z]+(?:[ -][A-Za-z]+)*$", category)
}

/// Non-negative decimal with at most two fractional digits and no leading zeros
pub fn validate_amount(amount: &str) -> bool {
    regex_is_match!(r"^(0|[1-9][0-9]*)(\.[0-9]{1,2})?$", amount)
}

/// `YYYY-MM-DD` that names a real calendar date
pub fn validate_date(date: &str) -> bool {
    if !regex_is_match!(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$", date) {
        return false;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Finite and strictly positive
pub fn validate_exchange_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description() {
        assert!(validate_description("Lunch at cafeteria"));
        assert!(validate_description("a"));
        assert!(!validate_description(""));
        assert!(!validate_description(" leading"));
        assert!(!validate_description("trailing "));
        assert!(!validate_description("line\nbreak"));
        // Left to has_double_spaces
        assert!(validate_description("double  space"));
    }

    #[test]
    fn test_double_spaces() {
        assert!(has_double_spaces("double  space"));
        assert!(!has_double_spaces("single space"));
    }

    #[test]
    fn test_duplicate_words() {
        assert_eq!(
            find_duplicate_words("the the quick fox"),
            Some(vec!["the".to_string()])
        );
        assert_eq!(
            find_duplicate_words("a quick quick fox"),
            Some(vec!["quick".to_string()])
        );
        assert_eq!(find_duplicate_words("no dup here"), None);
    }

    #[test]
    fn test_duplicate_words_edge_cases() {
        assert_eq!(find_duplicate_words("The the cat"), Some(vec!["The".to_string()]));
        assert_eq!(find_duplicate_words("the theater"), None);
        assert_eq!(find_duplicate_words("the, the"), None);
        assert_eq!(
            find_duplicate_words("go go go now now"),
            Some(vec!["go".to_string(), "now".to_string()])
        );
        assert_eq!(find_duplicate_words(""), None);
    }

    #[test]
    fn test_category() {
        assert!(validate_category("Food"));
        assert!(validate_category("Self-care"));
        assert!(validate_category("Eating Out"));
        assert!(!validate_category(""));
        assert!(!validate_category("Food2"));
        assert!(!validate_category("-Food"));
        assert!(!validate_category("Food "));
        assert!(!validate_category("Eating  Out"));
        assert!(!validate_category("Food&Drink"));
    }

    #[test]
    fn test_amount() {
        assert!(validate_amount("12.5"));
        assert!(validate_amount("0"));
        assert!(validate_amount("100.00"));
        assert!(!validate_amount("12.345"));
        assert!(!validate_amount("-5"));
        assert!(!validate_amount("012"));
        assert!(!validate_amount("12."));
        assert!(!validate_amount(""));
    }

    #[test]
    fn test_date() {
        assert!(!validate_date("2025-02-30"));
        assert!(validate_date("2025-02-28"));
        assert!(validate_date("2024-02-29"));
        assert!(!validate_date("2025-13-01"));
        assert!(!validate_date("2025-1-01"));
        assert!(!validate_date("not a date"));
    }

    #[test]
    fn test_exchange_rate() {
        assert!(validate_exchange_rate(12.5));
        assert!(!validate_exchange_rate(0.0));
        assert!(!validate_exchange_rate(-1.0));
        assert!(!validate_exchange_rate(f64::NAN));
        assert!(!validate_exchange_rate(f64::INFINITY));
    }
}
