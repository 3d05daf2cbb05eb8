use super::traits::ConfigSection;
use crate::error::FloraError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    pub neighbor_order: NeighborOrder,
}

/// Order in which a genome's neighbours are enqueued during component discovery.
///
/// Only the presentation order of cluster members depends on this; the
/// partition itself is the same either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborOrder {
    /// Last declared neighbour first
    #[default]
    Reverse,
    /// First declared neighbour first
    Declaration,
}

impl ConfigSection for ClusteringConfig {
    fn section_name() -> &'static str {
        "clustering"
    }

    fn validate(&self) -> Result<(), FloraError> {
        Ok(())
    }
}
