pub mod config;
pub mod handlers;
pub mod models;

use actix_web::error::InternalError;
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::ports::ReportGenerator;
use self::config::ApiConfig;
use self::handlers::{health_check, preflight, report_handler};
use self::models::{ApiState, ErrorResponse};

/// Route of the report endpoint
pub const REPORT_ROUTE: &str = "/reports/webpage";

/// Headers added to every response so browser front-ends on other origins
/// can call the API.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// JSON extractor settings: malformed bodies become a 400 with an `ErrorResponse`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected malformed request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Invalid request body: {}",
            err
        )));
        InternalError::from_response(err, response).into()
    })
}

/// Registers the API routes. Expects `ApiConfig`, `ApiState` and a
/// `ReportGenerator` to be present as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource(REPORT_ROUTE)
                .route(web::post().to(report_handler))
                .route(web::method(Method::OPTIONS).to(preflight)),
        )
        .service(web::resource("/health").route(web::get().to(health_check)));
}

/// Starts the API server with the specified configuration
///
/// # Arguments
/// * `config` - Bind address and request timeout
/// * `generator` - Report service shared by all workers
#[instrument(skip_all, fields(host = %config.host, port = config.port))]
pub async fn start_server(config: ApiConfig, generator: Arc<dyn ReportGenerator>) -> Result<()> {
    info!("Starting webpage report API server on {}:{}", config.host, config.port);

    let config_data = web::Data::new(config.clone());
    let state_data = web::Data::new(ApiState::new());
    let generator_data: web::Data<dyn ReportGenerator> = web::Data::from(generator);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .app_data(config_data.clone())
            .app_data(state_data.clone())
            .app_data(generator_data.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))
    .map_err(|e| {
        error!("Failed to bind to {}:{}: {}", config.host, config.port, e);
        e
    })
    .with_context(|| format!("Failed to bind to {}:{}", config.host, config.port))?;

    server.run().await.context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}
