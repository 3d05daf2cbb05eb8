use crate::error::{FloraError, Result};
use crate::types::{FloraDocument, QueryPair};
use super::types::{PairKind, ValidationWarning};
use std::collections::HashSet;

pub struct DataValidator;

impl DataValidator {
    /// Check a parsed document before a graph is built from it.
    ///
    /// Empty or duplicate genome ids, negative adaptation factors and
    /// empty pair ids are errors. References to undeclared genomes are
    /// returned as warnings.
    pub fn validate_document(document: &FloraDocument) -> Result<Vec<ValidationWarning>> {
        let ids = Self::validate_genomes(document)?;

        let mut warnings = Vec::new();
        for genome in &document.genomes {
            for link in &genome.links {
                if !ids.contains(link.target_id.as_str()) {
                    warnings.push(ValidationWarning::UndeclaredLinkTarget {
                        source: genome.id.clone(),
                        target: link.target_id.clone(),
                    });
                }
            }
        }

        warnings.extend(Self::validate_pairs(&document.evolution_pairs, PairKind::Evolution, &ids)?);
        warnings.extend(Self::validate_pairs(&document.adaptation_pairs, PairKind::Adaptation, &ids)?);

        Ok(warnings)
    }

    fn validate_genomes(document: &FloraDocument) -> Result<HashSet<&str>> {
        let mut ids = HashSet::with_capacity(document.genomes.len());

        for (position, genome) in document.genomes.iter().enumerate() {
            if genome.id.is_empty() {
                return Err(FloraError::MalformedInput(format!(
                    "Genome #{} has an empty id",
                    position
                )));
            }
            if !ids.insert(genome.id.as_str()) {
                return Err(FloraError::MalformedInput(format!(
                    "Duplicate genome id '{}'",
                    genome.id
                )));
            }
            for link in &genome.links {
                if link.target_id.is_empty() {
                    return Err(FloraError::MalformedInput(format!(
                        "Genome '{}' declares a link with an empty target",
                        genome.id
                    )));
                }
                if link.adaptation_factor < 0 {
                    return Err(FloraError::MalformedInput(format!(
                        "Link {} -> {} has negative adaptation factor {}",
                        genome.id, link.target_id, link.adaptation_factor
                    )));
                }
            }
        }

        Ok(ids)
    }

    fn validate_pairs(
        pairs: &[QueryPair],
        kind: PairKind,
        ids: &HashSet<&str>,
    ) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        for (index, pair) in pairs.iter().enumerate() {
            for id in [&pair.first_id, &pair.second_id] {
                if id.is_empty() {
                    return Err(FloraError::MalformedInput(format!(
                        "{} pair #{} has an empty id",
                        kind, index
                    )));
                }
                if !ids.contains(id.as_str()) {
                    warnings.push(ValidationWarning::UnknownPairEndpoint {
                        kind,
                        index,
                        id: id.clone(),
                    });
                }
            }
        }

        Ok(warnings)
    }
}
