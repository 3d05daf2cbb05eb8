use crate::error::{FloraError, Result};
use crate::types::GenomeRecord;

/// Directed, weighted edge owned by its source genome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub target: String,
    pub adaptation_factor: u64,
}

/// A node of the flora graph.
///
/// `links` keeps the order in which they were declared. Repeated links to
/// the same target are kept as separate edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    pub id: String,
    pub evolution_factor: i64,
    pub links: Vec<Link>,
}

impl Genome {
    pub fn new(id: impl Into<String>, evolution_factor: i64) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(FloraError::MalformedInput("Genome id must not be empty".to_string()));
        }
        Ok(Self {
            id,
            evolution_factor,
            links: Vec::new(),
        })
    }

    /// Build a genome from an ingested record, rejecting negative link weights
    pub fn from_record(record: GenomeRecord) -> Result<Self> {
        let mut genome = Self::new(record.id, record.evolution_factor)?;
        for link in record.links {
            if link.target_id.is_empty() {
                return Err(FloraError::MalformedInput(format!(
                    "Genome '{}' declares a link with an empty target",
                    genome.id
                )));
            }
            let adaptation_factor = u64::try_from(link.adaptation_factor).map_err(|_| {
                FloraError::MalformedInput(format!(
                    "Link {} -> {} has negative adaptation factor {}",
                    genome.id, link.target_id, link.adaptation_factor
                ))
            })?;
            genome.links.push(Link {
                target: link.target_id,
                adaptation_factor,
            });
        }
        Ok(genome)
    }
}
