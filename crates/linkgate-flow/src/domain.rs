//! Domain extraction and normalization

use url::Url;

/// Extract the normalized host from a URL.
///
/// Lowercases the host and strips a single leading `www.`. Returns
/// `None` for unparseable input or URLs without a host; pure and
/// side-effect free.
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_www() {
        assert_eq!(
            extract_domain("HTTPS://WWW.Example.com/path"),
            Some("example.com".to_string())
        );
        assert_eq!(
            extract_domain("https://example.com"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_strips_only_one_www() {
        assert_eq!(
            extract_domain("https://www.www.example.com"),
            Some("www.example.com".to_string())
        );
    }

    #[test]
    fn test_ignores_port_and_query() {
        assert_eq!(
            extract_domain("https://shop.example:8443/cart?item=1"),
            Some("shop.example".to_string())
        );
    }

    #[test]
    fn test_rejects_inputs_without_a_host() {
        assert_eq!(extract_domain("not a url"), None);
        assert_eq!(extract_domain("mailto:user@example.com"), None);
        assert_eq!(extract_domain(""), None);
    }
}
