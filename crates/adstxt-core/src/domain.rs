//! Domain-syntax validation and root-domain (eTLD+1) extraction.
//!
//! The syntax gate decides whether a string is a bare host name at all; the
//! root-domain helper reduces an observed URL or host to its registrable
//! domain against the public-suffix dataset.

use url::Url;

use crate::error::DomainError;

/// Check that `domain` is a bare host name: no scheme, no path, no port, no
/// userinfo or query text.
///
/// The check synthesizes `http://{domain}` and accepts only if the parsed
/// host echoes the input. A `host:port` input is therefore always invalid;
/// field #1 of an ads.txt record carries no port.
///
/// # Examples
///
/// ```
/// use adstxt_core::is_valid_domain_syntax;
///
/// assert!(is_valid_domain_syntax("rubiconproject.com"));
/// assert!(!is_valid_domain_syntax("http://rubiconproject.com"));
/// assert!(!is_valid_domain_syntax("rubiconproject.com/path"));
/// ```
pub fn is_valid_domain_syntax(domain: &str) -> bool {
    if domain.contains("://") {
        return false;
    }

    match Url::parse(&format!("http://{domain}")) {
        // The parser lower-cases the host it echoes back, so compare
        // case-insensitively; anything a bare host cannot contain ends up
        // outside the host component and makes the echo differ.
        Ok(url) => url
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(domain)),
        Err(err) => {
            log::debug!("failed to parse {domain:?} as a host: {err}");
            false
        }
    }
}

/// Extract the root domain (public suffix plus one label) from a raw URL or
/// host string.
///
/// Some exchange-operated hosts are registered as public-suffix entries
/// themselves; for those the bare suffix stands in for the root rather than
/// failing the extraction.
///
/// # Examples
///
/// ```
/// use adstxt_core::root_domain;
///
/// let root = root_domain("https://fastlane.rubiconproject.com/x").unwrap();
/// assert_eq!(root, "rubiconproject.com");
/// ```
pub fn root_domain(raw: &str) -> Result<String, DomainError> {
    let host = strip_to_host(raw).to_lowercase();
    if host.is_empty() {
        return Err(DomainError::NoRootDomain(raw.to_string()));
    }

    if let Some(domain) = psl::domain_str(&host) {
        return Ok(domain.to_string());
    }
    match psl::suffix_str(&host) {
        Some(suffix) => Ok(suffix.to_string()),
        None => Err(DomainError::NoRootDomain(raw.to_string())),
    }
}

/// Cut a raw URL down to its host: drop the scheme, then everything from the
/// first path separator, then any port.
fn strip_to_host(raw: &str) -> &str {
    let rest = match raw.find("://") {
        Some(idx) => &raw[idx + 3..],
        None => raw,
    };
    let rest = match rest.find('/') {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    match rest.find(':') {
        Some(idx) => &rest[..idx],
        None => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domain_syntax() {
        assert!(is_valid_domain_syntax("rubiconproject.com"));
        assert!(is_valid_domain_syntax("RUBICONPROJECT.COM"));
        assert!(is_valid_domain_syntax("fastlane.rubiconproject.com"));
    }

    #[test]
    fn test_syntax_rejects_scheme() {
        assert!(!is_valid_domain_syntax("http://rubiconproject.com"));
        assert!(!is_valid_domain_syntax("https://rubiconproject.com"));
    }

    #[test]
    fn test_syntax_rejects_non_host_text() {
        assert!(!is_valid_domain_syntax("rubiconproject.com/path"));
        assert!(!is_valid_domain_syntax("rubiconproject.com:8080"));
        assert!(!is_valid_domain_syntax("user@rubiconproject.com"));
        assert!(!is_valid_domain_syntax("rubiconproject.com?q=1"));
        assert!(!is_valid_domain_syntax(""));
    }

    #[test]
    fn test_strip_to_host() {
        assert_eq!(strip_to_host("https://ads.example.com/path"), "ads.example.com");
        assert_eq!(strip_to_host("ads.example.com:8080"), "ads.example.com");
        assert_eq!(strip_to_host("example.com"), "example.com");
    }

    #[test]
    fn test_root_domain_strips_scheme_path_and_subdomains() {
        assert_eq!(
            root_domain("https://fastlane.rubiconproject.com/x").unwrap(),
            "rubiconproject.com"
        );
    }

    #[test]
    fn test_root_domain_strips_port() {
        assert_eq!(root_domain("ads.example.com:8080").unwrap(), "example.com");
    }

    #[test]
    fn test_root_domain_multi_label_suffix() {
        assert_eq!(
            root_domain("foo.bar.tabletmedia.co.uk").unwrap(),
            "tabletmedia.co.uk"
        );
    }

    #[test]
    fn test_root_domain_bare_public_suffix_falls_back() {
        assert_eq!(root_domain("co.uk").unwrap(), "co.uk");
        // Privately registered suffix with no further label.
        assert_eq!(root_domain("s3.amazonaws.com").unwrap(), "s3.amazonaws.com");
    }

    #[test]
    fn test_root_domain_empty_input() {
        assert!(root_domain("").is_err());
        assert!(root_domain("https://").is_err());
    }
}
