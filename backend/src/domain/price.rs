//! Price bucket matching against free-text price strings.
//!
//! Buckets are pattern matches on the textual price ("$15", "Free entry",
//! "$25-$40"), not numeric parsing. The boundaries are the dashboard's
//! long-standing contract, seams included, and are reproduced as-is.

use once_cell::sync::Lazy;
use regex::Regex;

/// A two-or-more-digit dollar amount of 20 or above ($20-$99, or $100+).
static AMOUNT_20_OR_MORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(?:[2-9][0-9]|[0-9]{3,})").unwrap());

/// $25-$49, or exactly $50.
static AMOUNT_25_TO_50: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(?:2[5-9]|[34][0-9]|50)").unwrap());

/// $50-$99, or exactly $100.
static AMOUNT_50_TO_100: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(?:5[0-9]|[6-9][0-9]|100)").unwrap());

/// Any dollar amount of three or more digits.
static AMOUNT_100_OR_MORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$[0-9]{3,}").unwrap());

/// Match a price string against a bucket token. The sentinel "any-price",
/// the empty token, and unrecognized tokens impose no constraint. A missing
/// price is treated as the empty string.
pub fn matches_price_range(price: Option<&str>, range_token: &str) -> bool {
    let token = range_token.trim();
    if token.is_empty() || token.eq_ignore_ascii_case("any-price") {
        return true;
    }

    let text = price.unwrap_or("");
    match token {
        "free" => text.is_empty() || text.to_lowercase().contains("free") || text.contains("$0"),
        "under-25" => text.contains('$') && !AMOUNT_20_OR_MORE.is_match(text),
        "25-50" => AMOUNT_25_TO_50.is_match(text),
        "50-100" => AMOUNT_50_TO_100.is_match(text),
        "over-100" => AMOUNT_100_OR_MORE.is_match(text),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_bucket() {
        assert!(matches_price_range(Some(""), "free"));
        assert!(matches_price_range(None, "free"));
        assert!(matches_price_range(Some("Free admission"), "free"));
        assert!(matches_price_range(Some("$0"), "free"));
        assert!(!matches_price_range(Some("$15"), "free"));
    }

    #[test]
    fn test_under_25() {
        assert!(matches_price_range(Some("$15"), "under-25"));
        assert!(matches_price_range(Some("$5"), "under-25"));
        assert!(!matches_price_range(Some("$25"), "under-25"));
        assert!(!matches_price_range(Some("$150"), "under-25"));
        // No dollar sign at all fails the bucket.
        assert!(!matches_price_range(Some("15 dollars"), "under-25"));
        assert!(!matches_price_range(Some(""), "under-25"));
    }

    #[test]
    fn test_25_to_50() {
        assert!(matches_price_range(Some("$25"), "25-50"));
        assert!(matches_price_range(Some("$39"), "25-50"));
        assert!(matches_price_range(Some("$50"), "25-50"));
        assert!(!matches_price_range(Some("$15"), "25-50"));
        assert!(!matches_price_range(Some("$60"), "25-50"));
    }

    #[test]
    fn test_50_to_100() {
        assert!(matches_price_range(Some("$50"), "50-100"));
        assert!(matches_price_range(Some("$85"), "50-100"));
        assert!(matches_price_range(Some("$100"), "50-100"));
        assert!(!matches_price_range(Some("$45"), "50-100"));
    }

    #[test]
    fn test_over_100() {
        assert!(matches_price_range(Some("$150"), "over-100"));
        assert!(matches_price_range(Some("$1000"), "over-100"));
        assert!(!matches_price_range(Some("$99"), "over-100"));
    }

    #[test]
    fn test_bucket_seams_are_preserved() {
        // "$100" satisfies both 50-100 and over-100; that overlap is part
        // of the contract and deliberately not "fixed".
        assert!(matches_price_range(Some("$100"), "50-100"));
        assert!(matches_price_range(Some("$100"), "over-100"));
        // A price range string matches on any contained amount.
        assert!(matches_price_range(Some("$25-$40 per person"), "25-50"));
    }

    #[test]
    fn test_sentinel_and_unknown_tokens_pass() {
        assert!(matches_price_range(Some("$15"), "any-price"));
        assert!(matches_price_range(Some("$15"), ""));
        assert!(matches_price_range(Some("$15"), "cheap"));
        assert!(matches_price_range(None, "cheap"));
    }
}
