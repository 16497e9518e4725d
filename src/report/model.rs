use serde::{Deserialize, Serialize};

use crate::error::HeadingLevel;

/// The finished analysis of one web page.
///
/// Built once by the report service and read-only afterwards. Serializes with
/// camelCase keys (`documentVersion`, `headerOneCount`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPageReport {
    document_version: String,
    title: String,
    external_link_count: usize,
    internal_link_count: usize,
    contains_login: bool,
    header_one_count: usize,
    header_two_count: usize,
    header_three_count: usize,
    header_four_count: usize,
    header_five_count: usize,
    header_six_count: usize,
}

/// Field values collected by the service before the report is frozen.
#[derive(Debug, Default)]
pub(crate) struct ReportParts {
    pub document_version: String,
    pub title: String,
    pub external_link_count: usize,
    pub internal_link_count: usize,
    pub contains_login: bool,
    pub header_counts: [usize; 6],
}

impl From<ReportParts> for WebPageReport {
    fn from(parts: ReportParts) -> Self {
        let [h1, h2, h3, h4, h5, h6] = parts.header_counts;
        Self {
            document_version: parts.document_version,
            title: parts.title,
            external_link_count: parts.external_link_count,
            internal_link_count: parts.internal_link_count,
            contains_login: parts.contains_login,
            header_one_count: h1,
            header_two_count: h2,
            header_three_count: h3,
            header_four_count: h4,
            header_five_count: h5,
            header_six_count: h6,
        }
    }
}

impl WebPageReport {
    pub fn document_version(&self) -> &str {
        &self.document_version
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn external_link_count(&self) -> usize {
        self.external_link_count
    }

    pub fn internal_link_count(&self) -> usize {
        self.internal_link_count
    }

    pub fn contains_login(&self) -> bool {
        self.contains_login
    }

    pub fn header_count(&self, level: HeadingLevel) -> usize {
        match level {
            HeadingLevel::One => self.header_one_count,
            HeadingLevel::Two => self.header_two_count,
            HeadingLevel::Three => self.header_three_count,
            HeadingLevel::Four => self.header_four_count,
            HeadingLevel::Five => self.header_five_count,
            HeadingLevel::Six => self.header_six_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let report = WebPageReport::from(ReportParts {
            document_version: "5".to_string(),
            title: "Home".to_string(),
            external_link_count: 2,
            internal_link_count: 3,
            contains_login: true,
            header_counts: [1, 2, 0, 0, 0, 4],
        });

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["documentVersion"], "5");
        assert_eq!(value["title"], "Home");
        assert_eq!(value["externalLinkCount"], 2);
        assert_eq!(value["internalLinkCount"], 3);
        assert_eq!(value["containsLogin"], true);
        assert_eq!(value["headerOneCount"], 1);
        assert_eq!(value["headerTwoCount"], 2);
        assert_eq!(value["headerSixCount"], 4);
        assert_eq!(value.as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_header_count_by_level() {
        let report = WebPageReport::from(ReportParts {
            header_counts: [6, 5, 4, 3, 2, 1],
            ..Default::default()
        });
        let counts: Vec<_> = HeadingLevel::ALL
            .iter()
            .map(|level| report.header_count(*level))
            .collect();
        assert_eq!(counts, vec![6, 5, 4, 3, 2, 1]);
    }
}
