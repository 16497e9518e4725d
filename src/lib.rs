//! Web page report service.
//!
//! Fetches an HTML page and reports its HTML version, title, internal and
//! external link counts, whether it contains a login form and how many
//! headings of each level it has.

pub mod api;
pub mod cli;
pub mod error;
pub mod parser;
pub mod ports;
pub mod report;
pub mod settings;
pub mod url_parser;
pub mod utils;

pub use error::{AnalysisError, HeadingLevel, ReportError, ReportField};
pub use ports::{DocumentAnalyzer, DocumentLoader, ReportGenerator};
pub use report::{ReportService, WebPageReport};
