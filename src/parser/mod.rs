pub mod document;
pub mod loader;
pub mod webpage;

pub use document::ParsedDocument;
pub use loader::{HttpDocumentLoader, LoaderConfig};
pub use webpage::WebPageAnalyzer;
