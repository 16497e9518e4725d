use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

use super::model::{ReportParts, WebPageReport};
use crate::error::{AnalysisError, HeadingLevel, ReportError, ReportField};
use crate::parser::WebPageAnalyzer;
use crate::ports::{DocumentAnalyzer, DocumentLoader, ReportGenerator};
use crate::utils::timing::StageTimer;

/// Generates reports by loading a document and running every extractor on it.
#[derive(Debug)]
pub struct ReportService<L> {
    loader: L,
}

impl<L: DocumentLoader> ReportService<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

#[async_trait(?Send)]
impl<L: DocumentLoader> ReportGenerator for ReportService<L> {
    #[instrument(skip(self))]
    async fn generate_report(&self, location: &str) -> Result<WebPageReport, ReportError> {
        info!("Generating report for {}", location);

        let document = self.loader.load(location).await.map_err(|source| {
            error!("Failed to load {}: {}", location, source);
            ReportError::InvalidPage {
                location: location.to_string(),
                source,
            }
        })?;

        let analyzer = WebPageAnalyzer::with_document(document);
        let report = assemble_report(&analyzer)?;

        info!(
            "Report for {}: version={}, links={}/{} (internal/external), login={}",
            location,
            report.document_version(),
            report.internal_link_count(),
            report.external_link_count(),
            report.contains_login()
        );
        Ok(report)
    }
}

/// Runs the extractors in a fixed order and freezes the result.
///
/// Order: version, title, external links, internal links, login form, then
/// h1 through h6. The first failure is returned with the failing field
/// attached and nothing after it runs.
pub fn assemble_report<A>(analyzer: &A) -> Result<WebPageReport, ReportError>
where
    A: DocumentAnalyzer + ?Sized,
{
    let mut timer = StageTimer::new();
    let mut parts = ReportParts {
        document_version: extract(&mut timer, ReportField::DocumentVersion, || {
            analyzer.document_version()
        })?,
        title: extract(&mut timer, ReportField::Title, || analyzer.title())?,
        external_link_count: extract(&mut timer, ReportField::ExternalLinkCount, || {
            analyzer.external_link_count()
        })?,
        internal_link_count: extract(&mut timer, ReportField::InternalLinkCount, || {
            analyzer.internal_link_count()
        })?,
        contains_login: extract(&mut timer, ReportField::ContainsLogin, || {
            analyzer.contains_login()
        })?,
        header_counts: [0; 6],
    };

    for (slot, level) in parts.header_counts.iter_mut().zip(HeadingLevel::ALL) {
        *slot = extract(&mut timer, ReportField::HeaderCount(level), || {
            analyzer.header_count(level)
        })?;
    }

    debug!("Report stage timings:\n{}", timer.summary());
    Ok(parts.into())
}

fn extract<T>(
    timer: &mut StageTimer,
    field: ReportField,
    stage: impl FnOnce() -> Result<T, AnalysisError>,
) -> Result<T, ReportError> {
    timer.time(field.to_string(), stage).map_err(|source| {
        warn!("Failed to get {}: {}", field, source);
        ReportError::Field { field, source }
    })
}
