use tracing::error;

use crate::error::AnalysisError;

// Constants for validation
pub const MAX_URL_LENGTH: usize = 2048;  // Maximum allowable URL length

/// Validates that a location can be fetched over HTTP
pub fn validate_location(location: &str) -> Result<url::Url, AnalysisError> {
    if location.is_empty() {
        error!("Received empty URL");
        return Err(AnalysisError::CouldNotLoadDocument("URL cannot be empty".to_string()));
    }

    if location.len() > MAX_URL_LENGTH {
        error!("URL exceeds maximum length: {} > {}", location.len(), MAX_URL_LENGTH);
        return Err(AnalysisError::CouldNotLoadDocument(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(location).map_err(|e| {
        error!("Failed to parse URL '{}': {}", location, e);
        AnalysisError::CouldNotLoadDocument(format!("failed to parse URL: {}", e))
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        error!("URL lacks proper protocol: {}", location);
        return Err(AnalysisError::CouldNotLoadDocument(
            "URL must start with http:// or https://".to_string(),
        ));
    }

    Ok(parsed)
}
