// 📏 Line Validator - Input Grammar
// Accepts or rejects raw purchase lines before any parsing happens

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar for one purchase line: leading digits, whitespace, description
/// words, a single-space-delimited "at" (case-insensitive), then a price of
/// the form digits, one separator character, exactly two digits.
///
/// The separator before the two final digits is an unescaped `.` on
/// purpose: ANY single character is accepted there, so "1 pen at 10x00"
/// passes the grammar. Tightening this would silently reject inputs the
/// deployed behavior accepts; the leniency is pinned by tests below.
static LINE_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d)+\s(\w|\s)+\sat\s(\d)*.(\d\d)$").expect("Invalid regex pattern")
});

/// Check whether a raw input line matches the purchase grammar.
///
/// Pure predicate, no side effects. Empty lines are invalid.
pub fn is_valid_line(line: &str) -> bool {
    LINE_GRAMMAR.is_match(line)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_line() {
        assert!(is_valid_line("1 imported box of chocolates at 10.00"));
        assert!(is_valid_line("12 bottle of perfume at 47.50"));
    }

    #[test]
    fn test_rejects_leading_non_digit_token() {
        assert!(!is_valid_line("www 1 imported box of chocolates at 10.00"));
    }

    #[test]
    fn test_rejects_missing_at_keyword() {
        assert!(!is_valid_line("1 imported box of chocolates 10.00"));
    }

    #[test]
    fn test_at_keyword_is_case_insensitive() {
        assert!(is_valid_line("1 bottle of perfume AT 47.50"));
        assert!(is_valid_line("1 bottle of perfume At 47.50"));
    }

    #[test]
    fn test_rejects_empty_and_blank_lines() {
        assert!(!is_valid_line(""));
        assert!(!is_valid_line("   "));
    }

    #[test]
    fn test_rejects_malformed_price() {
        assert!(!is_valid_line("1 pen at 10.0"));
        assert!(!is_valid_line("1 pen at 10.000"));
        assert!(!is_valid_line("1 pen at ten.00"));
    }

    // The price separator matches any single character. This is deliberate
    // leniency carried over from the deployed grammar; see LINE_GRAMMAR.
    #[test]
    fn test_price_separator_is_any_character() {
        assert!(is_valid_line("1 pen at 10x00"));
        assert!(is_valid_line("1 pen at 10,00"));
    }

    #[test]
    fn test_rejects_missing_quantity() {
        assert!(!is_valid_line("pen at 10.00"));
        assert!(!is_valid_line(" 1 pen at 10.00"));
    }
}
