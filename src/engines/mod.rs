pub mod graph;
pub mod evaluation;
pub mod analysis;
pub mod reporting;

pub use analysis::{analyze_document, AnalysisReport, FloraAnalyzer};
