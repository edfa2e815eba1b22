use once_cell::sync::Lazy;
use regex::Regex;

static PROBLEM_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"leetcode\.com/problems/([^/?#]+)").unwrap());

/// Extract the problem slug from a LeetCode problem URL.
///
/// Returns `None` when the URL does not point at `leetcode.com/problems/<slug>`.
pub fn slug_from_url(url: &str) -> Option<&str> {
    PROBLEM_SLUG
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
