use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::error::AnalysisError;

/// Optional http(s) scheme, then everything up to the first `/`, `?`, `#` or `:`.
pub static HOSTNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([^/?#:]+)").unwrap()
});

/// Extracts the hostname from a URL string.
///
/// The match is purely textual: no scheme is required, no case folding is
/// applied and the port, path, query and fragment are cut off.
///
/// # Examples
/// * `https://example.com:8080/a` -> `example.com`
/// * `example.com?q=1` -> `example.com`
/// * `/docs` -> `NoHostnameFound`
pub fn extract_hostname(url: &str) -> Result<String, AnalysisError> {
    match HOSTNAME_REGEX.captures(url).and_then(|caps| caps.get(2)) {
        Some(host) => {
            trace!("Extracted hostname {} from {}", host.as_str(), url);
            Ok(host.as_str().to_string())
        }
        None => Err(AnalysisError::NoHostnameFound(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_scheme() {
        assert_eq!(extract_hostname("https://example.com/path").unwrap(), "example.com");
        assert_eq!(extract_hostname("http://example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_extract_without_scheme() {
        assert_eq!(extract_hostname("example.com/path").unwrap(), "example.com");
    }

    #[test]
    fn test_extract_stops_at_delimiters() {
        assert_eq!(extract_hostname("https://example.com:8443/x").unwrap(), "example.com");
        assert_eq!(extract_hostname("https://example.com?q=1").unwrap(), "example.com");
        assert_eq!(extract_hostname("https://example.com#top").unwrap(), "example.com");
    }

    #[test]
    fn test_extract_keeps_case() {
        assert_eq!(extract_hostname("https://Example.COM/").unwrap(), "Example.COM");
    }

    #[test]
    fn test_extract_fails_on_empty_and_relative() {
        assert_eq!(
            extract_hostname(""),
            Err(AnalysisError::NoHostnameFound(String::new()))
        );
        assert!(matches!(
            extract_hostname("/relative/path"),
            Err(AnalysisError::NoHostnameFound(_))
        ));
        assert!(matches!(
            extract_hostname("#anchor"),
            Err(AnalysisError::NoHostnameFound(_))
        ));
    }

    #[test]
    fn test_scheme_only_prefix_is_not_a_host() {
        // "https:" is cut at the colon, leaving "https" as the textual host
        assert_eq!(extract_hostname("https:").unwrap(), "https");
    }
}
