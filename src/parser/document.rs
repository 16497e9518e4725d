use scraper::node::Doctype;
use scraper::{Html, Selector};

use crate::error::AnalysisError;

/// An owned parse tree together with the URL it was loaded from.
///
/// The tree is html5ever's output stored in an arena (`ego_tree`), so nodes
/// refer to each other by id rather than by pointer. A document belongs to a
/// single report generation and is never mutated after parsing.
#[derive(Debug)]
pub struct ParsedDocument {
    html: Html,
    source_url: String,
}

impl ParsedDocument {
    /// Parses `content` as a full HTML document.
    ///
    /// HTML parsing is forgiving: malformed or empty input still produces a
    /// tree, so this cannot fail.
    pub fn from_string(content: &str, source_url: impl Into<String>) -> Self {
        Self {
            html: Html::parse_document(content),
            source_url: source_url.into(),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// The doctype declaration, only if it is the very first node.
    pub fn doctype(&self) -> Option<&Doctype> {
        self.html
            .tree
            .root()
            .first_child()
            .and_then(|node| node.value().as_doctype())
    }
}

/// Compiles a CSS selector, reporting a rejected query as `FailedQuerying`.
pub fn compile_selector(css: &str) -> Result<Selector, AnalysisError> {
    Selector::parse(css)
        .map_err(|e| AnalysisError::FailedQuerying(format!("invalid selector '{}': {:?}", css, e)))
}
