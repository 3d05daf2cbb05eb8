pub mod connectors;

pub use connectors::{DataValidator, DocumentConnector, DocumentFormat, DocumentMetadata};
