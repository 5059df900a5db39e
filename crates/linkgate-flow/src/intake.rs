//! Link intake from shared text
//!
//! Share sheets hand over free-form text rather than a clean URL; only
//! the first http(s) link in the blob is routed through the gate.

use regex::Regex;
use std::sync::OnceLock;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Find the first http(s) link in a blob of shared text.
pub fn extract_first_url(text: &str) -> Option<&str> {
    let pattern =
        URL_PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("pattern is valid"));

    pattern.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_link() {
        let text = "Check this out: https://example.com/a and https://other.test/b";
        assert_eq!(extract_first_url(text), Some("https://example.com/a"));
    }

    #[test]
    fn test_plain_text_has_no_link() {
        assert_eq!(extract_first_url("no links here"), None);
        assert_eq!(extract_first_url("ftp://example.com/file"), None);
    }

    #[test]
    fn test_link_ends_at_whitespace() {
        assert_eq!(
            extract_first_url("http://example.com/path?q=1 trailing words"),
            Some("http://example.com/path?q=1")
        );
    }
}
