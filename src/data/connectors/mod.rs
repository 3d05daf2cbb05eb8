mod document;
mod types;
mod validator;
mod xml;

pub use document::DocumentConnector;
pub use types::{
    DocumentFormat,
    DocumentMetadata,
    PairKind,
    ValidationWarning,
};
pub use validator::DataValidator;
pub use xml::parse_xml;
