use crate::error::{FloraError, Result};
use crate::types::FloraDocument;
use std::path::Path;
use super::{
    types::{DocumentFormat, DocumentMetadata},
    validator::DataValidator,
    xml::parse_xml,
};

pub struct DocumentConnector;

impl DocumentConnector {
    /// Load a document, picking the parser from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<FloraDocument> {
        let format = DocumentFormat::from_path(&path)?;
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            FloraError::DataLoading(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::parse(&contents, format)
    }

    pub fn parse(contents: &str, format: DocumentFormat) -> Result<FloraDocument> {
        let document = match format {
            DocumentFormat::Xml => parse_xml(contents)?,
            DocumentFormat::Json => serde_json::from_str(contents)?,
            DocumentFormat::Toml => toml::from_str(contents)?,
        };
        Ok(document)
    }

    /// Load and validate a document.
    ///
    /// Structural problems are errors; dangling references are only logged.
    pub fn load_and_validate<P: AsRef<Path>>(path: P) -> Result<FloraDocument> {
        let document = Self::load(&path)?;

        let warnings = DataValidator::validate_document(&document)?;
        for warning in &warnings {
            log::warn!("{}", warning);
        }

        let metadata = Self::create_metadata(&path, &document)?;
        log::info!(
            "Loaded {} ({} genomes, {} links, {} evolution pairs, {} adaptation pairs)",
            metadata.file_path,
            metadata.num_genomes,
            metadata.num_links,
            metadata.num_evolution_pairs,
            metadata.num_adaptation_pairs
        );

        Ok(document)
    }

    pub fn create_metadata<P: AsRef<Path>>(
        path: P,
        document: &FloraDocument,
    ) -> Result<DocumentMetadata> {
        Ok(DocumentMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            format: DocumentFormat::from_path(&path)?,
            num_genomes: document.genomes.len(),
            num_links: document.genomes.iter().map(|g| g.links.len()).sum(),
            num_evolution_pairs: document.evolution_pairs.len(),
            num_adaptation_pairs: document.adaptation_pairs.len(),
        })
    }
}
