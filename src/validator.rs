//! URL normalization and syntactic validation.
//!
//! Purely string-based: no parsing into `url::Url`, no DNS lookups. The
//! accepted shape is `http(s)://label.label.tld[:port][/path]`.

use std::sync::LazyLock;

use regex::Regex;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:[a-z0-9\-]+\.)+[a-z]{2,}(?::\d+)?(?:/\S*)?$")
        .expect("URL pattern is a valid regex")
});

/// Trims the candidate and prepends `https://` when no http(s) scheme is present.
///
/// The scheme check is case-insensitive and nothing else about the string is
/// altered. Empty (or whitespace-only) input yields an empty string.
///
/// # Examples
///
/// ```
/// use phishing_checker::validator::normalize;
///
/// assert_eq!(normalize("  example.com "), "https://example.com");
/// assert_eq!(normalize("HTTP://Example.com"), "HTTP://Example.com");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{HTTPS_PREFIX}{trimmed}")
    }
}

/// Returns true iff the whole string is a syntactically acceptable http(s) URL.
///
/// # Examples
///
/// ```
/// use phishing_checker::validator::is_valid;
///
/// assert!(is_valid("https://sub.example.co.uk:8080/path"));
/// assert!(!is_valid("https://not a url"));
/// ```
pub fn is_valid(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

fn has_http_scheme(s: &str) -> bool {
    starts_with_ignore_case(s, HTTP_PREFIX) || starts_with_ignore_case(s, HTTPS_PREFIX)
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
