use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use super::document::{compile_selector, ParsedDocument};
use crate::error::{AnalysisError, HeadingLevel};
use crate::ports::DocumentAnalyzer;
use crate::url_parser::is_internal;

/// "HTML" in any case followed by a dotted version number, e.g. `HTML 4.01`.
static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[Hh][Tt][Mm][Ll] ([0-9](\.[0-9][0-9]*)*)").unwrap()
});

/// Version reported for a bare `<!DOCTYPE html>`.
pub const HTML5_VERSION: &str = "5";

const USER_INPUT_TYPES: [&str; 2] = ["text", "email"];
const PASSWORD_INPUT_TYPE: &str = "password";

/// Analyzer over a single loaded [`ParsedDocument`].
///
/// Starts out empty; every query fails with `DocumentNotLoaded` until a
/// document is loaded with [`WebPageAnalyzer::load`] or
/// [`WebPageAnalyzer::from_string`].
#[derive(Debug, Default)]
pub struct WebPageAnalyzer {
    document: Option<ParsedDocument>,
}

impl WebPageAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: ParsedDocument) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Replaces the currently loaded document, if any.
    pub fn load(&mut self, document: ParsedDocument) {
        self.document = Some(document);
    }

    /// Parses `content` and loads it with `url` as its source.
    pub fn from_string(&mut self, content: &str, url: &str) {
        self.load(ParsedDocument::from_string(content, url));
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    fn document(&self) -> Result<&ParsedDocument, AnalysisError> {
        self.document.as_ref().ok_or(AnalysisError::DocumentNotLoaded)
    }

    /// Every `href` of every `<a>`, in document order.
    fn links<'a>(&self, document: &'a ParsedDocument) -> Result<Vec<&'a str>, AnalysisError> {
        let selector = compile_selector("a[href]")?;
        Ok(document
            .html()
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .collect())
    }

    fn count_links(&self, want_internal: bool) -> Result<usize, AnalysisError> {
        let document = self.document()?;
        let mut count = 0;
        for link in self.links(document)? {
            if is_internal(document.source_url(), link)? == want_internal {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl DocumentAnalyzer for WebPageAnalyzer {
    fn document_version(&self) -> Result<String, AnalysisError> {
        let document = self.document()?;
        let doctype = document.doctype().ok_or(AnalysisError::NoVersionFound)?;

        // The first declared identifier, mirroring the attribute order of the
        // declaration itself.
        let declared = [doctype.public_id(), doctype.system_id()]
            .into_iter()
            .find(|id| !id.is_empty());

        let Some(identifier) = declared else {
            return Ok(HTML5_VERSION.to_string());
        };

        trace!("Matching version in doctype identifier: {}", identifier);
        VERSION_REGEX
            .captures(identifier)
            .and_then(|caps| caps.get(1))
            .map(|version| version.as_str().to_string())
            .ok_or(AnalysisError::NoVersionFound)
    }

    fn title(&self) -> Result<String, AnalysisError> {
        let document = self.document()?;
        let selector = compile_selector("title")?;
        let title = document
            .html()
            .select(&selector)
            .next()
            .ok_or(AnalysisError::ElementNotFound("title"))?;

        let text = title
            .first_child()
            .and_then(|node| node.value().as_text())
            .map(|text| (**text).to_string())
            .unwrap_or_default();
        Ok(text)
    }

    fn external_link_count(&self) -> Result<usize, AnalysisError> {
        self.count_links(false)
    }

    fn internal_link_count(&self) -> Result<usize, AnalysisError> {
        self.count_links(true)
    }

    fn contains_login(&self) -> Result<bool, AnalysisError> {
        let document = self.document()?;
        let form_selector = compile_selector("form")?;
        let input_selector = compile_selector("input")?;

        for (index, form) in document.html().select(&form_selector).enumerate() {
            let mut has_user_input = false;
            let mut has_password_input = false;
            for input in form.select(&input_selector) {
                match input.value().attr("type") {
                    Some(kind) if USER_INPUT_TYPES.contains(&kind) => has_user_input = true,
                    Some(PASSWORD_INPUT_TYPE) => has_password_input = true,
                    _ => {}
                }
            }
            if has_user_input && has_password_input {
                debug!("Form #{} looks like a login form", index);
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn header_count(&self, level: HeadingLevel) -> Result<usize, AnalysisError> {
        let document = self.document()?;
        let selector = compile_selector(level.tag())?;
        Ok(document.html().select(&selector).count())
    }
}
