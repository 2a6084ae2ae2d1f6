//! Turning preview notifications into launchable URIs.

use url::Url;

const URL_PREFIX: &str = "url:";

/// Strip a case-insensitive `url:` prefix from a notify payload.
pub fn strip_url_prefix(payload: &str) -> Option<&str> {
    let head = payload.get(..URL_PREFIX.len())?;
    if head.eq_ignore_ascii_case(URL_PREFIX) {
        Some(&payload[URL_PREFIX.len()..])
    } else {
        None
    }
}

fn is_well_formed(candidate: &str) -> bool {
    !candidate.is_empty()
        && !candidate.chars().any(char::is_whitespace)
        && Url::parse(candidate).is_ok()
}

/// Keep `raw` when it is already a well-formed URI with a scheme separator,
/// otherwise assume a bare web address and prepend `http://`.
pub fn normalize_link(raw: &str) -> String {
    if raw.contains("://") && is_well_formed(raw) {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    }
}

/// Resolve a notify payload to a URI to launch, or `None` when the payload
/// is not a link request or cannot be made into a valid URI.
pub fn link_target(payload: &str) -> Option<Url> {
    let raw = strip_url_prefix(payload)?;
    let normalized = normalize_link(raw);
    if !is_well_formed(&normalized) {
        return None;
    }
    Url::parse(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_case_insensitive() {
        assert_eq!(strip_url_prefix("url:example.com"), Some("example.com"));
        assert_eq!(strip_url_prefix("URL:example.com"), Some("example.com"));
        assert_eq!(strip_url_prefix("Url:"), Some(""));
        assert_eq!(strip_url_prefix("link:example.com"), None);
        assert_eq!(strip_url_prefix("ur"), None);
    }

    #[test]
    fn test_strip_prefix_non_ascii_boundary() {
        assert_eq!(strip_url_prefix("ü:x"), None);
        assert_eq!(strip_url_prefix("urlé"), None);
    }

    #[test]
    fn test_well_formed_uri_kept() {
        assert_eq!(normalize_link("https://rust-lang.org/learn"), "https://rust-lang.org/learn");
        assert_eq!(normalize_link("ftp://files.example.com"), "ftp://files.example.com");
    }

    #[test]
    fn test_bare_host_gets_http() {
        assert_eq!(normalize_link("example.com/page"), "http://example.com/page");
        assert_eq!(normalize_link("www.example.com"), "http://www.example.com");
    }

    #[test]
    fn test_malformed_with_separator_gets_http() {
        assert_eq!(normalize_link("://broken"), "http://://broken");
        assert_eq!(normalize_link("http://bad host"), "http://http://bad host");
    }

    #[test]
    fn test_link_target_valid() {
        let url = link_target("url:https://example.com/a?b=c").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a?b=c");

        let url = link_target("URL:example.com").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_link_target_rejects_garbage() {
        assert!(link_target("url:not a url").is_none());
        assert!(link_target("url:").is_none());
        assert!(link_target("url:://broken").is_none());
        assert!(link_target("hello").is_none());
        assert!(link_target("").is_none());
    }
}
