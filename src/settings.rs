use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::api::config::{ApiConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::parser::LoaderConfig;
use crate::parser::loader::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_BODY_BYTES, DEFAULT_USER_AGENT};

/// Prefix of environment variables read into [`Settings`],
/// e.g. `WEBPAGE_REPORT_PORT=9000`.
pub const ENV_PREFIX: &str = "WEBPAGE_REPORT";

const DEFAULT_LOG_DIR: &str = "logs";

/// Process-wide settings: defaults, then an optional file, then environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_dir: String,
    /// Upper bound for one report request at the HTTP layer
    pub request_timeout_secs: u64,
    /// Upper bound for fetching the document
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub max_body_bytes: usize,
}

impl Settings {
    /// Loads settings, reading `path` when given (format picked from its extension).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("log_dir", DEFAULT_LOG_DIR)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("fetch_timeout_secs", DEFAULT_FETCH_TIMEOUT_SECS as i64)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("max_body_bytes", DEFAULT_MAX_BODY_BYTES as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::new()
            .with_timeout(Duration::from_secs(self.fetch_timeout_secs))
            .with_user_agent(self.user_agent.clone())
            .with_max_body_bytes(self.max_body_bytes)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            host: self.host.clone(),
            port: self.port,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "port = 9191").unwrap();
        writeln!(file, "user_agent = \"Probe/2.0\"").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.port, 9191);
        assert_eq!(settings.user_agent, "Probe/2.0");
        assert_eq!(settings.log_dir, "logs");

        let loader = settings.loader_config();
        assert_eq!(loader.user_agent, "Probe/2.0");
        assert_eq!(loader.request_timeout, Duration::from_secs(settings.fetch_timeout_secs));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/definitely/not/here/settings.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_match_component_defaults() {
        // Prefix nobody sets, so only the built-in defaults apply
        let settings = Settings::load_with_prefix(None, "WEBPAGE_REPORT_DEFAULTS_TEST").unwrap();
        assert_eq!(settings.log_dir, "logs");

        let api = settings.api_config();
        let default_api = ApiConfig::default();
        assert_eq!(api.host, default_api.host);
        assert_eq!(api.port, default_api.port);
        assert_eq!(api.request_timeout, default_api.request_timeout);

        let loader = settings.loader_config();
        let default_loader = LoaderConfig::default();
        assert_eq!(loader.request_timeout, default_loader.request_timeout);
        assert_eq!(loader.user_agent, default_loader.user_agent);
        assert_eq!(loader.max_body_bytes, default_loader.max_body_bytes);
    }

    #[test]
    fn test_environment_overrides_file_and_defaults() {
        const PREFIX: &str = "WEBPAGE_REPORT_ENV_TEST";
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "port = 9191").unwrap();
        writeln!(file, "host = \"10.0.0.1\"").unwrap();

        std::env::set_var(format!("{}_PORT", PREFIX), "9999");
        std::env::set_var(format!("{}_LOG_DIR", PREFIX), "/x/y");
        let result = Settings::load_with_prefix(Some(file.path()), PREFIX);
        std::env::remove_var(format!("{}_PORT", PREFIX));
        std::env::remove_var(format!("{}_LOG_DIR", PREFIX));

        let settings = result.unwrap();
        assert_eq!(settings.port, 9999);
        assert_eq!(settings.log_dir, "/x/y");
        assert_eq!(settings.host, "10.0.0.1");
        assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_api_config_from_settings() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "host = \"0.0.0.0\"").unwrap();
        writeln!(file, "request_timeout_secs = 5").unwrap();

        let api = Settings::load(Some(file.path())).unwrap().api_config();
        assert_eq!(api.host, "0.0.0.0");
        assert_eq!(api.request_timeout, Duration::from_secs(5));
    }
}
