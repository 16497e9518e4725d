use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use webpage_report::api::start_server;
use webpage_report::cli::{Cli, Commands};
use webpage_report::parser::HttpDocumentLoader;
use webpage_report::settings::Settings;
use webpage_report::utils::logger::init_logger;
use webpage_report::{ReportGenerator, ReportService};

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(log_dir) = &cli.log_dir {
        settings.log_dir = log_dir.clone();
    }

    // Logging is best effort; the service still runs without a log file
    if let Err(e) = init_logger(&settings.log_dir) {
        eprintln!("Failed to initialize logger: {:#}", e);
    }

    let loader = HttpDocumentLoader::new(settings.loader_config())?;
    let service = ReportService::new(loader);

    match cli.selected_command() {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                settings.host = host;
            }
            if let Some(port) = port {
                settings.port = port;
            }
            start_server(settings.api_config(), Arc::new(service)).await
        }
        Commands::Analyze { url } => {
            let report = service.generate_report(&url).await?;
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize report")?;
            println!("{}", json);
            Ok(())
        }
    }
}
