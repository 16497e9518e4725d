pub mod model;
pub mod service;

pub use model::WebPageReport;
pub use service::{assemble_report, ReportService};
