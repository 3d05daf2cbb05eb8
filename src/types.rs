use serde::{Deserialize, Serialize};

/// Directed, weighted link as declared in an input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(alias = "targetId", alias = "target")]
    pub target_id: String,
    #[serde(alias = "adaptationFactor")]
    pub adaptation_factor: i64,
}

/// Genome as declared in an input document, before graph construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeRecord {
    pub id: String,
    #[serde(alias = "evolutionFactor")]
    pub evolution_factor: i64,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

impl GenomeRecord {
    pub fn new(id: impl Into<String>, evolution_factor: i64) -> Self {
        Self {
            id: id.into(),
            evolution_factor,
            links: Vec::new(),
        }
    }

    /// Append a link, keeping declaration order
    pub fn with_link(mut self, target_id: impl Into<String>, adaptation_factor: i64) -> Self {
        self.links.push(LinkRecord {
            target_id: target_id.into(),
            adaptation_factor,
        });
        self
    }
}

/// A `(firstId, secondId)` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPair {
    #[serde(alias = "firstId")]
    pub first_id: String,
    #[serde(alias = "secondId")]
    pub second_id: String,
}

impl QueryPair {
    pub fn new(first_id: impl Into<String>, second_id: impl Into<String>) -> Self {
        Self {
            first_id: first_id.into(),
            second_id: second_id.into(),
        }
    }
}

/// Fully parsed input: genomes in table order plus both query lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloraDocument {
    #[serde(default)]
    pub genomes: Vec<GenomeRecord>,
    #[serde(default, alias = "possibleEvolutionPairs")]
    pub evolution_pairs: Vec<QueryPair>,
    #[serde(default, alias = "possibleAdaptationPairs")]
    pub adaptation_pairs: Vec<QueryPair>,
}
