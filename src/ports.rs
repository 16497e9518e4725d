//! Capability traits at the seams of the report pipeline.
//!
//! The orchestration in [`crate::report`] only talks to these traits, so it
//! can run against fakes without any network access.

use async_trait::async_trait;

use crate::error::{AnalysisError, HeadingLevel, ReportError};
use crate::parser::ParsedDocument;
use crate::report::WebPageReport;

/// Retrieves and parses the document found at a location.
#[async_trait(?Send)]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, location: &str) -> Result<ParsedDocument, AnalysisError>;
}

/// Derives the individual report fields from one loaded document.
///
/// Every method fails with [`AnalysisError::DocumentNotLoaded`] while no
/// document is loaded. Calls never modify the document.
pub trait DocumentAnalyzer {
    fn document_version(&self) -> Result<String, AnalysisError>;
    fn title(&self) -> Result<String, AnalysisError>;
    fn external_link_count(&self) -> Result<usize, AnalysisError>;
    fn internal_link_count(&self) -> Result<usize, AnalysisError>;
    fn contains_login(&self) -> Result<bool, AnalysisError>;
    fn header_count(&self, level: HeadingLevel) -> Result<usize, AnalysisError>;

    fn header_one_count(&self) -> Result<usize, AnalysisError> {
        self.header_count(HeadingLevel::One)
    }

    fn header_two_count(&self) -> Result<usize, AnalysisError> {
        self.header_count(HeadingLevel::Two)
    }

    fn header_three_count(&self) -> Result<usize, AnalysisError> {
        self.header_count(HeadingLevel::Three)
    }

    fn header_four_count(&self) -> Result<usize, AnalysisError> {
        self.header_count(HeadingLevel::Four)
    }

    fn header_five_count(&self) -> Result<usize, AnalysisError> {
        self.header_count(HeadingLevel::Five)
    }

    fn header_six_count(&self) -> Result<usize, AnalysisError> {
        self.header_count(HeadingLevel::Six)
    }
}

/// Entry point used by the HTTP layer and the CLI.
#[async_trait(?Send)]
pub trait ReportGenerator: Send + Sync {
    async fn generate_report(&self, location: &str) -> Result<WebPageReport, ReportError>;
}
