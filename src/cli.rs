use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webpage_report",
    version,
    about = "Fetches a web page and reports its HTML version, title, links, login forms and headings",
    long_about = "webpage_report analyzes one HTML page at a time. Run it as an HTTP service \
                  (POST /reports/webpage) or analyze a single URL from the command line."
)]
pub struct Cli {
    /// Settings file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for log files, overrides the settings
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP service (default)
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Analyze one URL and print the report as JSON
    Analyze {
        url: String,
    },
}

impl Cli {
    /// The chosen subcommand, `serve` when none was given
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve { host: None, port: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["webpage_report"]).unwrap();
        assert_eq!(cli.selected_command(), Commands::Serve { host: None, port: None });
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "webpage_report", "serve", "--host", "0.0.0.0", "--port", "9000",
        ])
        .unwrap();
        assert_eq!(
            cli.selected_command(),
            Commands::Serve { host: Some("0.0.0.0".to_string()), port: Some(9000) }
        );
    }

    #[test]
    fn test_analyze_with_global_options() {
        let cli = Cli::try_parse_from([
            "webpage_report", "analyze", "https://example.com", "--log-dir", "/tmp/logs",
        ])
        .unwrap();
        assert_eq!(cli.selected_command(), Commands::Analyze { url: "https://example.com".to_string() });
        assert_eq!(cli.log_dir.as_deref(), Some("/tmp/logs"));
    }

    #[test]
    fn test_analyze_requires_url() {
        assert!(Cli::try_parse_from(["webpage_report", "analyze"]).is_err());
    }
}
