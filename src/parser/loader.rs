use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, header::{HeaderMap, HeaderValue, USER_AGENT}};
use std::time::Duration;
use tracing::{debug, error, info, instrument, trace};

use super::document::ParsedDocument;
use crate::error::AnalysisError;
use crate::ports::DocumentLoader;
use crate::url_parser::validate_location;

// Constants for loader configuration
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
const CONNECTION_TIMEOUT: u64 = 10; // seconds
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_USER_AGENT: &str = "WebPageReport/0.1";

/// Configuration for fetching documents over HTTP
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub request_timeout: Duration,
    pub connection_timeout: Duration,
    pub user_agent: String,
    pub max_body_bytes: usize,
}

impl LoaderConfig {
    /// Creates a new loader configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total timeout of one fetch
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the timeout for establishing the connection
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Sets the user agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the largest body that will be parsed
    pub fn with_max_body_bytes(mut self, max: usize) -> Self {
        self.max_body_bytes = max;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            connection_timeout: Duration::from_secs(CONNECTION_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Loads documents by fetching them with a shared HTTP client.
///
/// Redirects are followed by the client, but the document keeps the requested
/// location as its source URL.
#[derive(Debug, Clone)]
pub struct HttpDocumentLoader {
    client: Client,
    config: LoaderConfig,
}

impl HttpDocumentLoader {
    pub fn new(config: LoaderConfig) -> Result<Self> {
        debug!("Initializing HTTP client with user agent: {}", config.user_agent);
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .context("Failed to create User-Agent header")?;
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connection_timeout)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    async fn fetch(&self, location: &str) -> Result<String, AnalysisError> {
        debug!("Sending request to {}", location);
        let resp = self.client.get(location).send().await.map_err(|e| {
            error!("Failed to send request to {}: {}", location, e);
            AnalysisError::CouldNotLoadDocument(format!("request to {} failed: {}", location, e))
        })?;

        let status = resp.status();
        debug!("Response status: {}", status);
        trace!("Response headers: {:?}", resp.headers());
        if !status.is_success() {
            return Err(AnalysisError::CouldNotLoadDocument(format!(
                "{} answered with status {}",
                location, status
            )));
        }

        if let Some(length) = resp.content_length() {
            if length as usize > self.config.max_body_bytes {
                return Err(self.too_large(location));
            }
        }

        // Decodes with the charset from Content-Type, falling back to UTF-8
        let body = resp.text().await.map_err(|e| {
            error!("Failed to read body from {}: {}", location, e);
            AnalysisError::CouldNotLoadDocument(format!("failed to read body: {}", e))
        })?;
        if body.len() > self.config.max_body_bytes {
            return Err(self.too_large(location));
        }

        Ok(body)
    }

    fn too_large(&self, location: &str) -> AnalysisError {
        error!("Body of {} exceeds {} bytes", location, self.config.max_body_bytes);
        AnalysisError::CouldNotLoadDocument(format!(
            "body exceeds maximum size of {} bytes",
            self.config.max_body_bytes
        ))
    }
}

#[async_trait(?Send)]
impl DocumentLoader for HttpDocumentLoader {
    #[instrument(level = "debug", skip(self))]
    async fn load(&self, location: &str) -> Result<ParsedDocument, AnalysisError> {
        validate_location(location)?;
        let body = self.fetch(location).await?;
        info!("Fetched {} bytes from {}", body.len(), location);
        Ok(ParsedDocument::from_string(&body, location))
    }
}
