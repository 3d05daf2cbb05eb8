pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use config::{AppConfig, ConfigManager};
pub use data::DocumentConnector;
pub use engines::analysis::{analyze_document, AnalysisReport, FloraAnalyzer};
pub use engines::evaluation::{PairEvaluator, ADAPTATION_SENTINEL, EVOLUTION_SENTINEL};
pub use engines::graph::{Cluster, Genome, GenomeGraph, Link};
pub use error::{FloraError, Result};
pub use types::{FloraDocument, GenomeRecord, LinkRecord, QueryPair};
