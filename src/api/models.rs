use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Request to analyze a web page
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportRequest {
    /// URL of the page to analyze
    pub url: String,
}

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status indicator: error
    pub status: String,

    /// Error message details
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Health status response for the /health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub uptime_secs: u64,
    pub reports_generated: usize,
    pub reports_failed: usize,
}

/// Counters shared by all workers of the server
#[derive(Debug)]
pub struct ApiState {
    started: Instant,
    reports_generated: AtomicUsize,
    reports_failed: AtomicUsize,
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiState {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            reports_generated: AtomicUsize::new(0),
            reports_failed: AtomicUsize::new(0),
        }
    }

    pub fn record_success(&self) {
        self.reports_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.reports_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            uptime_secs: self.started.elapsed().as_secs(),
            reports_generated: self.reports_generated.load(Ordering::Relaxed),
            reports_failed: self.reports_failed.load(Ordering::Relaxed),
        }
    }
}
