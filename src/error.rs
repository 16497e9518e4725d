use std::fmt;
use thiserror::Error;

/// Error kinds produced while loading or analyzing a document.
///
/// Callers match on these variants; the messages are for logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Fetching or parsing the document failed.
    #[error("could not load document: {0}")]
    CouldNotLoadDocument(String),

    /// An analyzer operation was called before a document was loaded.
    #[error("document has not been loaded")]
    DocumentNotLoaded,

    /// The doctype is missing or names no recognizable HTML version.
    #[error("could not find document version")]
    NoVersionFound,

    /// A required element is absent from the document.
    #[error("could not find element <{0}>")]
    ElementNotFound(&'static str),

    /// The query itself was rejected, independent of the document contents.
    #[error("failed to query document: {0}")]
    FailedQuerying(String),

    /// The string does not match the hostname pattern.
    #[error("URL: {0} -> no hostname found")]
    NoHostnameFound(String),

    /// The document's own source URL has no usable hostname.
    #[error("the website's URL is not valid: {0}")]
    InvalidPageUrl(String),
}

/// The report field whose extraction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    DocumentVersion,
    Title,
    ExternalLinkCount,
    InternalLinkCount,
    ContainsLogin,
    HeaderCount(HeadingLevel),
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportField::DocumentVersion => write!(f, "document version"),
            ReportField::Title => write!(f, "title"),
            ReportField::ExternalLinkCount => write!(f, "external link count"),
            ReportField::InternalLinkCount => write!(f, "internal link count"),
            ReportField::ContainsLogin => write!(f, "login form presence"),
            ReportField::HeaderCount(level) => write!(f, "{} count", level.tag()),
        }
    }
}

/// Heading levels `<h1>` through `<h6>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::One,
        HeadingLevel::Two,
        HeadingLevel::Three,
        HeadingLevel::Four,
        HeadingLevel::Five,
        HeadingLevel::Six,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::One => "h1",
            HeadingLevel::Two => "h2",
            HeadingLevel::Three => "h3",
            HeadingLevel::Four => "h4",
            HeadingLevel::Five => "h5",
            HeadingLevel::Six => "h6",
        }
    }
}

/// Failure of a whole report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The document at `location` could not be retrieved or parsed.
    #[error("URL is invalid or unreachable: {location}")]
    InvalidPage {
        location: String,
        #[source]
        source: AnalysisError,
    },

    /// One of the field extractors failed; no partial report is produced.
    #[error("failed to get {field}: {source}")]
    Field {
        field: ReportField,
        #[source]
        source: AnalysisError,
    },
}

impl ReportError {
    /// The underlying error kind, whichever stage produced it.
    pub fn kind(&self) -> &AnalysisError {
        match self {
            ReportError::InvalidPage { source, .. } => source,
            ReportError::Field { source, .. } => source,
        }
    }

    /// The failing field, if the failure happened after loading.
    pub fn field(&self) -> Option<ReportField> {
        match self {
            ReportError::InvalidPage { .. } => None,
            ReportError::Field { field, .. } => Some(*field),
        }
    }
}
