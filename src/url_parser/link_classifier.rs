use tracing::debug;

use super::hostname::extract_hostname;
use crate::error::AnalysisError;

/// Decides whether `link_url` points to the same site as `page_url`.
///
/// Root-relative links (`/...`) are internal without looking at hostnames.
/// A link whose hostname cannot be extracted counts as external, while a page
/// URL without a hostname is an error. Hostnames must match exactly, so
/// `support.example.com` is external to `example.com`.
pub fn is_internal(page_url: &str, link_url: &str) -> Result<bool, AnalysisError> {
    if link_url.starts_with('/') {
        return Ok(true);
    }

    let link_hostname = match extract_hostname(link_url) {
        Ok(hostname) => hostname,
        Err(e) => {
            debug!("Treating link as external: {}", e);
            return Ok(false);
        }
    };

    let page_hostname = extract_hostname(page_url)
        .map_err(|e| AnalysisError::InvalidPageUrl(e.to_string()))?;

    Ok(link_hostname == page_hostname)
}
