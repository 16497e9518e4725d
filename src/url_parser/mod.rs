//! URL helpers used by the document analyzer: hostname extraction, link
//! classification and validation of locations before they are fetched.

pub mod hostname;
pub mod link_classifier;
pub mod url_validator;


pub use hostname::extract_hostname;
pub use link_classifier::is_internal;
pub use url_validator::validate_location;
