use actix_web::{web, HttpResponse, Responder};
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

use crate::api::config::ApiConfig;
use crate::api::models::{ApiState, ErrorResponse, ReportRequest};
use crate::ports::ReportGenerator;

/// HTTP handler for web page report requests
///
/// Answers 201 with the report, 400 when no URL was given, 500 when the
/// page could not be analyzed and 408 when analysis took longer than the
/// configured request timeout.
#[instrument(skip_all, fields(url = %request.url))]
pub async fn report_handler(
    request: web::Json<ReportRequest>,
    config: web::Data<ApiConfig>,
    state: web::Data<ApiState>,
    generator: web::Data<dyn ReportGenerator>,
) -> impl Responder {
    info!("Received report request for URL: {}", request.url);

    let url = request.url.trim();
    if url.is_empty() {
        warn!("Rejected request without URL");
        return HttpResponse::BadRequest().json(ErrorResponse::new("Missing URL"));
    }

    debug!("Waiting for report with timeout: {:?}", config.request_timeout);
    match timeout(config.request_timeout, generator.generate_report(url)).await {
        Ok(Ok(report)) => {
            state.record_success();
            info!("Report request completed successfully");
            HttpResponse::Created().json(report)
        }
        Ok(Err(e)) => {
            state.record_failure();
            error!("Report request failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))
        }
        Err(_) => {
            state.record_failure();
            error!("Request timed out after {:?}", config.request_timeout);
            HttpResponse::RequestTimeout().json(ErrorResponse::new("Request timed out."))
        }
    }
}

/// CORS preflight for the report endpoint
pub async fn preflight() -> impl Responder {
    HttpResponse::NoContent().finish()
}

/// Health check endpoint with uptime and request counters
#[instrument(skip(state))]
pub async fn health_check(state: web::Data<ApiState>) -> impl Responder {
    let health = state.health();
    debug!(
        "Health check: generated={}, failed={}",
        health.reports_generated, health.reports_failed
    );
    HttpResponse::Ok().json(health)
}
