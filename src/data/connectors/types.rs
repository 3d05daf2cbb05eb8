use crate::error::{FloraError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported input document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentFormat {
    Xml,
    Json,
    Toml,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Xml, Self::Json, Self::Toml]
    }

    /// Pick the format from a file extension (case-insensitive)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        Self::all()
            .into_iter()
            .find(|f| f.as_str() == extension)
            .ok_or_else(|| {
                FloraError::DataLoading(format!(
                    "Unsupported document type for {} (expected one of {:?})",
                    path.display(),
                    Self::all().iter().map(|f| f.as_str()).collect::<Vec<_>>()
                ))
            })
    }
}

/// Which query list a pair came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairKind {
    Evolution,
    Adaptation,
}

impl fmt::Display for PairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evolution => write!(f, "evolution"),
            Self::Adaptation => write!(f, "adaptation"),
        }
    }
}

/// Non-fatal findings about a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// A link points at an id with no genome of its own
    UndeclaredLinkTarget { source: String, target: String },
    /// A query pair names an id with no genome; it will evaluate to the sentinel
    UnknownPairEndpoint { kind: PairKind, index: usize, id: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndeclaredLinkTarget { source, target } => {
                write!(f, "link {} -> {} targets an undeclared genome", source, target)
            }
            Self::UnknownPairEndpoint { kind, index, id } => {
                write!(f, "{} pair #{} references unknown genome '{}'", kind, index, id)
            }
        }
    }
}

/// Summary of a loaded document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub format: DocumentFormat,
    pub num_genomes: usize,
    pub num_links: usize,
    pub num_evolution_pairs: usize,
    pub num_adaptation_pairs: usize,
}
